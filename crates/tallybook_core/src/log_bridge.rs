//! Buffers core log lines so the UI can drain them into its activity panel.
//! Every line is also forwarded to the `log` facade.

use once_cell::sync::Lazy;
use std::sync::Mutex;

static LOG_BUFFER: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

const MAX_BUFFER_LEN: usize = 500;

fn is_warning(s: &str) -> bool {
    let lower = s.to_lowercase();
    lower.contains("error")
        || lower.contains("failed")
        || lower.contains("rejected")
        || lower.contains("not found")
}

/// Push a log line. Called by the `core_log!` macro.
pub fn push(s: String) {
    if is_warning(&s) {
        log::warn!("{}", s);
    } else {
        log::info!("{}", s);
    }
    if let Ok(mut v) = LOG_BUFFER.lock() {
        v.push(s);
        let n = v.len();
        if n > MAX_BUFFER_LEN {
            v.drain(0..n - MAX_BUFFER_LEN);
        }
    }
}

/// Drain and clear buffered log lines.
pub fn drain_logs() -> Vec<String> {
    LOG_BUFFER
        .lock()
        .map(|mut v| std::mem::take(&mut *v))
        .unwrap_or_default()
}

#[macro_export]
macro_rules! core_log {
    ($($t:tt)*) => {
        $crate::log_bridge::push(format!($($t)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_bounded() {
        for i in 0..(MAX_BUFFER_LEN + 20) {
            push(format!("[tallybook] line {}", i));
        }
        let lines = drain_logs();
        assert!(lines.len() <= MAX_BUFFER_LEN);
        let last = format!("[tallybook] line {}", MAX_BUFFER_LEN + 19);
        assert!(lines.iter().any(|l| *l == last));
    }
}
