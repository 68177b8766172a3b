use std::env;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://results.eci.gov.in/ResultAcGenNov2025/";
const DEFAULT_STATE_CODE: &str = "S04";
const DEFAULT_FIRST_AC: u32 = 1;
const DEFAULT_LAST_AC: u32 = 243;
const DEFAULT_OUTPUT_CSV: &str = "2025_Bihar_Election_Fulldata.csv";
const DEFAULT_REQUEST_DELAY_MS: u64 = 500;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_RETRIES: usize = 2;

#[derive(Clone, Debug)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub state_code: String,
    pub first_ac: u32,
    pub last_ac: u32,
    pub output_csv: PathBuf,
    pub request_delay: Duration,
    pub request_timeout: Duration,
    pub max_retries: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            state_code: DEFAULT_STATE_CODE.to_string(),
            first_ac: DEFAULT_FIRST_AC,
            last_ac: DEFAULT_LAST_AC,
            output_csv: PathBuf::from(DEFAULT_OUTPUT_CSV),
            request_delay: Duration::from_millis(DEFAULT_REQUEST_DELAY_MS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl ScrapeConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("RESULTS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            state_code: env::var("RESULTS_STATE_CODE")
                .unwrap_or_else(|_| DEFAULT_STATE_CODE.to_string()),
            first_ac: env_parse("RESULTS_FIRST_AC", DEFAULT_FIRST_AC),
            last_ac: env_parse("RESULTS_LAST_AC", DEFAULT_LAST_AC),
            output_csv: env::var("RESULTS_OUTPUT_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_CSV)),
            request_delay: Duration::from_millis(env_parse(
                "RESULTS_REQUEST_DELAY_MS",
                DEFAULT_REQUEST_DELAY_MS,
            )),
            request_timeout: Duration::from_secs(env_parse(
                "RESULTS_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )),
            max_retries: env_parse("RESULTS_MAX_RETRIES", DEFAULT_MAX_RETRIES),
        }
    }

    /// Results page for one assembly constituency, e.g. `.../ConstituencywiseS04195.htm`.
    pub fn page_url(&self, constituency_id: u32) -> String {
        format!(
            "{}Constituencywise{}{}.htm",
            self.base_url, self.state_code, constituency_id
        )
    }

    pub fn constituency_ids(&self) -> RangeInclusive<u32> {
        self.first_ac..=self.last_ac
    }
}

fn env_parse<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, raw: &str, default: T) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(key, value = raw, default = %default, "invalid setting, using default");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_has_no_padding() {
        let config = ScrapeConfig::default();
        assert_eq!(
            config.page_url(1),
            "https://results.eci.gov.in/ResultAcGenNov2025/ConstituencywiseS041.htm"
        );
        assert_eq!(
            config.page_url(243),
            "https://results.eci.gov.in/ResultAcGenNov2025/ConstituencywiseS04243.htm"
        );
    }

    #[test]
    fn default_range_covers_bihar() {
        let config = ScrapeConfig::default();
        assert_eq!(config.constituency_ids().count(), 243);
    }

    #[test]
    fn inverted_range_is_empty() {
        let config = ScrapeConfig {
            first_ac: 10,
            last_ac: 5,
            ..ScrapeConfig::default()
        };
        assert_eq!(config.constituency_ids().count(), 0);
    }

    #[test]
    fn invalid_numbers_fall_back() {
        assert_eq!(parse_or("RESULTS_LAST_AC", "abc", 243u32), 243);
        assert_eq!(parse_or("RESULTS_LAST_AC", " 40 ", 243u32), 40);
    }
}
