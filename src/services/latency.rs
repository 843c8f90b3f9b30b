/// Fixed artificial delay standing in for network latency.
///
/// Timer implementations differ per target: tokio on the server,
/// a browser timeout in hydrated builds. Plain library builds (unit
/// tests) resolve immediately.
pub async fn simulate_latency(ms: u64) {
    #[cfg(feature = "ssr")]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;

    #[cfg(all(target_arch = "wasm32", feature = "hydrate"))]
    {
        use futures::channel::oneshot;

        let (tx, rx) = oneshot::channel::<()>();
        gloo_timers::callback::Timeout::new(ms as u32, move || {
            let _ = tx.send(());
        })
        .forget();
        let _ = rx.await;
    }

    #[cfg(not(any(feature = "ssr", all(target_arch = "wasm32", feature = "hydrate"))))]
    {
        let _ = ms;
    }
}
