/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Deserialize;

// Parses strings that may be "" and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

// Parses values that may be null into their default
pub fn from_null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let v: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(v.unwrap_or_default())
}
