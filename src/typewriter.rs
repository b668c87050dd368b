use std::time::Duration;

use crate::mount::ResultsMount;

/// Escribe `text` en el montaje carácter a carácter, esperando `interval`
/// entre cada uno, y oculta el cursor al terminar.
pub async fn type_into<M>(mount: &mut M, text: &str, interval: Duration)
where
    M: ResultsMount + ?Sized,
{
    mount.clear();

    let mut buf = [0u8; 4];
    for ch in text.chars() {
        mount.write(ch.encode_utf8(&mut buf));
        if !interval.is_zero() {
            tokio::time::sleep(interval).await;
        }
    }

    mount.hide_cursor();
}
