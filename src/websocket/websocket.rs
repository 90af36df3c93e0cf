use crate::websocket::errors::ClusterError;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};

type HmacSha1 = Hmac<Sha1>;

/// Answer to a handshake challenge: hex of HMAC-SHA1 keyed with the raw
/// SHA-1 of the password, over the hex-decoded challenge bytes.
pub fn challenge_response(challenge: &str, password: &str) -> Result<String, ClusterError> {
    let challenge = hex::decode(challenge.trim())
        .map_err(|e| ClusterError::Decoding(format!("invalid challenge: {}", e)))?;
    let key = Sha1::digest(password.as_bytes());
    let mut mac = <HmacSha1 as Mac>::new_from_slice(&key)
        .map_err(|e| ClusterError::Encoding(e.to_string()))?;
    mac.update(&challenge);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Parses the `time` attribute of the ready frame. Naive timestamps are taken
/// as UTC.
pub fn parse_server_time(value: &str) -> Result<DateTime<Utc>, ClusterError> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(seconds) = value.parse::<i64>() {
        if let Some(parsed) = DateTime::from_timestamp(seconds, 0) {
            return Ok(parsed);
        }
    }
    Err(ClusterError::Decoding(format!("invalid server time '{}'", value)))
}

/// Module list of the ready frame, comma or space separated.
pub fn split_modules(value: &str) -> Vec<String> {
    value
        .split([',', ' '])
        .map(str::trim)
        .filter(|module| !module.is_empty())
        .map(str::to_string)
        .collect()
}
