//! Wire encoders for the remote sinks
//!
//! Both are pure functions of the event and the dispatch configuration.

use super::config::DispatchConfig;
use super::event::LogEvent;
use url::form_urlencoded;

/// Encode an event as a row tuple for the columnar store
///
/// Shape: `('<caller>',<timestamp>,'<LEVEL>','<message>','<service>',,'','','','<env>')`.
/// The bare empty slot and the three quoted empty slots are reserved columns
/// and stay empty.
///
/// ```
/// use rust_fanout_logger::core::{encode, DispatchConfig, Level, LogEvent};
///
/// let config = DispatchConfig::new("tg?", "orders", "ch", "prod");
/// let event = LogEvent::new(Level::Info, "ready".to_string(), None).with_timestamp(100);
/// assert_eq!(
///     encode::columnar_row(&event, &config),
///     "('',100,'INFO','ready','orders',,'','','','prod')"
/// );
/// ```
pub fn columnar_row(event: &LogEvent, config: &DispatchConfig) -> String {
    format!(
        "('{}',{},'{}','{}','{}',,'','','','{}')",
        event.caller,
        event.timestamp,
        event.level,
        event.message,
        config.service_name,
        config.environment_tag,
    )
}

/// The unescaped alert line sent to the chat channel
pub fn chat_text(event: &LogEvent, config: &DispatchConfig) -> String {
    format!(
        "{}: {} {} {}",
        config.service_name, event.level, event.message, event.caller
    )
}

/// Webhook base followed by the query-escaped alert line
///
/// Form encoding: space becomes `+`, `*` stays literal and `~` is
/// percent-escaped. Both forms decode to the same text.
pub fn chat_url(event: &LogEvent, config: &DispatchConfig) -> String {
    let text = chat_text(event, config);
    let mut url = String::with_capacity(config.chat_webhook_base.len() + text.len() * 2);
    url.push_str(&config.chat_webhook_base);
    url.extend(form_urlencoded::byte_serialize(text.as_bytes()));
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CallerContext, Level};

    fn config() -> DispatchConfig {
        DispatchConfig::new("telegram_url?text=", "NOTIFY", "clickhouse_url", "STAGE")
    }

    fn event(level: Level, message: &str) -> LogEvent {
        let ctx = CallerContext::new(Some("billing"), "src/billing.rs", 40, 7);
        LogEvent::new(level, message.to_string(), Some(&ctx)).with_timestamp(1_700_032_400)
    }

    #[test]
    fn test_columnar_row_shape() {
        let row = columnar_row(&event(Level::Error, "fdsa"), &config());
        assert_eq!(
            row,
            "('billing src/billing.rs:40:7',1700032400,'ERROR','fdsa','NOTIFY',,'','','','STAGE')"
        );
    }

    #[test]
    fn test_columnar_row_slots() {
        let row = columnar_row(&event(Level::Debug, "no commas here"), &config());
        let inner = row.trim_start_matches('(').trim_end_matches(')');
        let slots: Vec<&str> = inner.split(',').collect();

        assert_eq!(slots.len(), 10);
        assert_eq!(slots[5], "");
        assert_eq!(&slots[6..9], &["''", "''", "''"]);
        assert_eq!(slots[9], "'STAGE'");
    }

    #[test]
    fn test_chat_url_escapes_text() {
        let url = chat_url(&event(Level::Error, "test123"), &config());
        assert_eq!(
            url,
            "telegram_url?text=NOTIFY%3A+ERROR+test123+billing+src%2Fbilling.rs%3A40%3A7"
        );
    }

    #[test]
    fn test_chat_text_without_caller() {
        let event = LogEvent::new(Level::Fatal, "disk full".to_string(), None);
        assert_eq!(chat_text(&event, &config()), "NOTIFY: FATAL disk full ");
    }

    #[test]
    fn test_chat_url_star_and_tilde() {
        let event = LogEvent::new(Level::Error, "a*b~c".to_string(), None);
        assert_eq!(
            chat_url(&event, &config()),
            "telegram_url?text=NOTIFY%3A+ERROR+a*b%7Ec+"
        );
    }
}
