/// Installs a test-writer subscriber honoring `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a registry builder with the listed models registered.
#[macro_export]
macro_rules! models {
    (
        $( $model:ident ),*
    ) => {{
        let mut builder = stencil::Registry::builder();
        $( builder.register::<$model>(); )*
        builder
    }};
}
