use result_rail::Outcome;
use std::sync::atomic::{AtomicU32, Ordering};

#[tokio::test]
async fn map_async_awaits_the_mapper() {
    let out = Outcome::<i32, String>::Ok(4).map_async(|x| async move { x + 1 }).await;
    assert_eq!(out, Outcome::Ok(5));
}

#[tokio::test]
async fn map_async_skips_errors() {
    let calls = AtomicU32::new(0);

    let out = Outcome::<i32, &str>::Err("no")
        .map_async(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { x + 1 }
        })
        .await;

    assert_eq!(out, Outcome::Err("no"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn and_then_async_chains() {
    async fn half(x: i32) -> Outcome<i32, String> {
        if x % 2 == 0 {
            Outcome::Ok(x / 2)
        } else {
            Outcome::Err(format!("{x} is odd"))
        }
    }

    let out = Outcome::Ok(12).and_then_async(half).await.and_then_async(half).await;
    assert_eq!(out, Outcome::Ok(3));

    let out = Outcome::Ok(6).and_then_async(half).await.and_then_async(half).await;
    assert_eq!(out, Outcome::Err("3 is odd".to_string()));
}

#[tokio::test]
async fn pipe_async_catches_panics_while_polling() {
    let out: Outcome<i32, String> = Outcome::Ok(1)
        .pipe_async(|x: i32| async move {
            tokio::task::yield_now().await;
            if x > 0 {
                panic!("async boom");
            }
            x
        })
        .await;

    assert_eq!(out, Outcome::Err("panicked: async boom".to_string()));
}

#[tokio::test]
async fn pipe_async_maps_successes() {
    let out: Outcome<String, String> =
        Outcome::Ok(7).pipe_async(|x: i32| async move { x.to_string() }).await;
    assert_eq!(out, Outcome::Ok("7".to_string()));
}

#[tokio::test]
async fn multi_map_async_uses_every_value() {
    let out = Outcome::<i32, String>::Ok(5)
        .join(Outcome::Ok(10))
        .map_async(|(count, step)| async move { (0..count).map(|i| i * step).sum::<i32>() })
        .await;
    assert_eq!(out, Outcome::Ok(100));

    let out = Outcome::<i32, String>::Ok(5)
        .join(Outcome::<i32, String>::Err("missing".to_string()))
        .map_async(|(a, b)| async move { a + b })
        .await;
    assert_eq!(out, Outcome::Err("missing".to_string()));
}
