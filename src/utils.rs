use once_cell::sync::Lazy;

pub static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime")
});

pub fn spawn_async<F>(fut: F) -> tokio::task::JoinHandle<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    RUNTIME.spawn(fut)
}

/// Run `fut` on the tokio runtime and hand its outcome to `on_done` on the
/// GTK main loop. A task that panicked arrives as `Err`.
#[cfg(feature = "gui")]
pub fn run_async_to_main<T, Fut, F>(fut: Fut, on_done: F)
where
    T: Send + 'static,
    Fut: std::future::Future<Output = T> + Send + 'static,
    F: FnOnce(Result<T, tokio::task::JoinError>) + 'static,
{
    let handle = spawn_async(fut);
    glib::MainContext::default().spawn_local(async move {
        let res = handle.await;
        if let Err(e) = &res {
            log::warn!("background task did not finish: {e}");
        }
        on_done(res);
    });
}

/// Trim, default to https, drop trailing slashes.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
