//! puffin instrumentation for scene imports.
//!
//! Scopes are recorded only after [`set_enabled`] turned recording on. Each
//! finished import closes one puffin frame through [`finish_import`], so a
//! viewer shows one frame per imported document.

pub use puffin;
use puffin::ScopeId;

pub fn set_enabled(enabled: bool) {
    puffin::set_scopes_on(enabled);
}

pub fn is_enabled() -> bool {
    puffin::are_scopes_on()
}

/// Closes the frame holding the scopes of the import that just finished.
pub fn finish_import() {
    if puffin::are_scopes_on() {
        puffin::GlobalProfiler::lock().new_frame();
    }
}

/// Open profiling scope, closed on drop. Inert while recording is off.
pub struct ImportScope(Option<puffin::ProfilerScope>);

impl ImportScope {
    #[inline]
    pub fn enter(scope_id: ScopeId, data: &str) -> Self {
        Self(
            puffin::are_scopes_on().then(|| puffin::ProfilerScope::new(scope_id, data)),
        )
    }

    pub fn is_recording(&self) -> bool {
        self.0.is_some()
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __import_scope {
    ($register:expr, $data:expr) => {{
        static SCOPE_ID: std::sync::OnceLock<$crate::puffin::ScopeId> =
            std::sync::OnceLock::new();
        let scope_id = *SCOPE_ID.get_or_init(|| $crate::puffin::ThreadProfiler::call($register));
        $crate::ImportScope::enter(scope_id, $data)
    }};
}

/// Records the enclosing function until the end of its body.
#[macro_export]
macro_rules! profile_function {
    () => {
        let _import_scope = $crate::__import_scope!(
            |tp| {
                tp.register_function_scope(
                    $crate::puffin::clean_function_name($crate::puffin::current_function_name!()),
                    $crate::puffin::short_file_name(file!()),
                    line!(),
                )
            },
            ""
        );
    };
}

/// Records a named scope until the end of the enclosing block.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr, $data:expr) => {
        let _import_scope = $crate::__import_scope!(
            |tp| {
                tp.register_named_scope(
                    $name,
                    $crate::puffin::clean_function_name($crate::puffin::current_function_name!()),
                    $crate::puffin::short_file_name(file!()),
                    line!(),
                )
            },
            $data
        );
    };
}
