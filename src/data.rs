//! Test data generation
//!
//! Pure functions producing randomized valid input data. No shared state, safe
//! to call from concurrently running tests. Uniqueness is best-effort: records
//! from one `user_data()` call share a millisecond timestamp, which keeps
//! parallel runs from colliding in practice but is no guaranteed-unique-ID
//! scheme.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A registration-shaped user record
///
/// Required identity fields are always present; address and credential fields
/// are optional so workflows can fill them conditionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Option<String>,
    pub loginname: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub zipcode: Option<String>,
}

/// Generate a random email of the shape `{prefix}{timestamp}{random}@example.com`
pub fn random_email(prefix: &str) -> String {
    let timestamp = now_millis();
    let random = rand::thread_rng().gen_range(0..1000);
    format!("{}{}{}@example.com", prefix, timestamp, random)
}

/// Generate a random alphanumeric string
pub fn random_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char).collect()
}

/// Generate a random number in the inclusive range `[min, max]`
pub fn random_number(min: u32, max: u32) -> u32 {
    rand::thread_rng().gen_range(min..=max)
}

/// Generate a fresh user record
///
/// All name-like fields share one timestamp so the fields of a single record
/// are distinct from each other and from other records created at a different
/// millisecond.
pub fn user_data() -> UserRecord {
    let timestamp = now_millis();
    UserRecord {
        first_name: format!("Test{}", timestamp),
        last_name: format!("User{}", timestamp),
        email: random_email("test"),
        password: Some(format!("Test1234{}", random_number(1000, 9999))),
        loginname: Some(format!("testuser{}", timestamp)),
        phone: None,
        address: None,
        city: None,
        country: None,
        region: None,
        zipcode: None,
    }
}

fn now_millis() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}
