// Unique-visitor counting against a local key-value store.
//
// A visitor is identified by a non-cryptographic 32-bit hash over a handful
// of browser properties. Two devices that hash alike are counted once.

use super::error::StoreError;
use super::store::KeyValueStore;

pub const COUNT_KEY: &str = "portfolio-views";
pub const VISITORS_KEY: &str = "portfolio-counted-visitors";
pub const FINGERPRINT_DELIMITER: char = '|';

/// Browser properties that make up a fingerprint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FingerprintSource {
    pub user_agent: String,
    pub language: String,
    pub screen_width: i32,
    pub screen_height: i32,
    /// `Date.getTimezoneOffset()`, minutes.
    pub timezone_offset: f64,
    /// Data URL of a small canvas with fixed text drawn on it.
    pub canvas_data_url: String,
}

impl FingerprintSource {
    /// Delimited string that gets hashed.
    pub fn canonical(&self) -> String {
        let d = FINGERPRINT_DELIMITER;
        format!(
            "{}{d}{}{d}{}x{}{d}{}{d}{}",
            self.user_agent,
            self.language,
            self.screen_width,
            self.screen_height,
            format_js_number(self.timezone_offset),
            self.canvas_data_url,
        )
    }

    pub fn fingerprint(&self) -> String {
        rolling_hash(&self.canonical()).unsigned_abs().to_string()
    }
}

/// Integral values print without a fractional part, as a JS number would.
fn format_js_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// `hash = ((hash << 5) - hash) + unit` over UTF-16 code units, wrapping at
/// 32 bits.
pub fn rolling_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(unit as i32)
    })
}

/// Leading decimal digits of `raw`, after optional whitespace and `+`.
/// Trailing garbage is ignored; negative or digitless values are `None`.
pub fn parse_count(raw: &str) -> Option<u64> {
    let rest = raw.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

/// Persisted counter state. Missing or malformed entries read as empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisitorRecord {
    pub count: u64,
    pub seen: Vec<String>,
}

impl VisitorRecord {
    pub fn load<K: KeyValueStore + ?Sized>(store: &K) -> Self {
        let count = store
            .get(COUNT_KEY)
            .and_then(|raw| parse_count(&raw))
            .unwrap_or(0);
        let seen = store
            .get(VISITORS_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .unwrap_or_default();
        Self { count, seen }
    }

    fn save<K: KeyValueStore + ?Sized>(&self, store: &mut K) -> Result<(), StoreError> {
        store.set(COUNT_KEY, &self.count.to_string())?;
        let json = serde_json::to_string(&self.seen).map_err(|source| StoreError::Encode {
            key: VISITORS_KEY.to_owned(),
            source,
        })?;
        store.set(VISITORS_KEY, &json)
    }
}

/// Count `fingerprint` if it has not been seen before and return the
/// resulting total.
pub fn record_view<K: KeyValueStore + ?Sized>(store: &mut K, fingerprint: &str) -> u64 {
    let mut record = VisitorRecord::load(&*store);
    if record.seen.iter().any(|f| f == fingerprint) {
        log::info!("[visitors] returning visitor, count stays at {}", record.count);
        return record.count;
    }
    record.count = record.count.saturating_add(1);
    record.seen.push(fingerprint.to_owned());
    if let Err(e) = record.save(store) {
        log::warn!("[visitors] {}", e);
    }
    log::info!("[visitors] new visitor, count is now {}", record.count);
    record.count
}

/// Output element for the counter.
pub trait TextSink {
    fn set_text(&self, text: &str);
}

/// Renders a count the way the page's locale writes numbers.
pub trait CountFormat {
    fn format_count(&self, count: u64) -> String;
}

impl<F: Fn(u64) -> String> CountFormat for F {
    fn format_count(&self, count: u64) -> String {
        self(count)
    }
}

/// Write `count` rendered by `format`. Returns false when there is no
/// output element.
pub fn display(output: Option<&dyn TextSink>, count: u64, format: &dyn CountFormat) -> bool {
    match output {
        Some(sink) => {
            sink.set_text(&format.format_count(count));
            true
        }
        None => {
            log::warn!("[visitors] view count element not found");
            false
        }
    }
}
