/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::ApiParams;
use crate::errors::HydrusError;

/// Identifies one or more files by numeric file id and/or SHA256 hash.
///
/// The Client API takes these under four different names. A list holding exactly
/// one entry is sent as the singular field (`file_id`, `hash`), a longer list as
/// the plural field (`file_ids`, `hashes`) and an empty list is left out.
///
/// ```rust
/// use hydrus::FileSelector;
///
/// let single = FileSelector::from_id(101);
/// let several = FileSelector::new([101, 102], Vec::<String>::new()).unwrap();
/// assert!(FileSelector::new([], Vec::<String>::new()).is_err());
/// # let _ = (single, several);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileSelector {
    file_ids: Vec<u64>,
    hashes: Vec<String>,
}

impl FileSelector {
    /// Creates a selector from ids and hashes. At least one of the two must be populated.
    pub fn new<I, H, S>(file_ids: I, hashes: H) -> Result<Self, HydrusError>
    where
        I: IntoIterator<Item = u64>,
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let file_ids: Vec<u64> = file_ids.into_iter().collect();
        let hashes: Vec<String> = hashes.into_iter().map(Into::into).collect();
        if file_ids.is_empty() && hashes.is_empty() {
            return Err(HydrusError::InvalidArgument(
                "At least one file id or hash is required".to_string(),
            ));
        }
        Ok(Self { file_ids, hashes })
    }

    pub fn from_id(file_id: u64) -> Self {
        Self {
            file_ids: vec![file_id],
            hashes: Vec::new(),
        }
    }

    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self {
            file_ids: Vec::new(),
            hashes: vec![hash.into()],
        }
    }

    pub fn from_ids(file_ids: impl IntoIterator<Item = u64>) -> Result<Self, HydrusError> {
        Self::new(file_ids, Vec::<String>::new())
    }

    pub fn from_hashes<S: Into<String>>(
        hashes: impl IntoIterator<Item = S>,
    ) -> Result<Self, HydrusError> {
        Self::new(Vec::new(), hashes)
    }

    pub fn file_ids(&self) -> &[u64] {
        &self.file_ids
    }

    pub fn hashes(&self) -> &[String] {
        &self.hashes
    }

    /// Writes the wire fields for this selection into `params`
    pub fn write_params(&self, params: &mut ApiParams) -> Result<(), HydrusError> {
        match self.file_ids.as_slice() {
            [] => (),
            [file_id] => {
                params.insert("file_id", file_id)?;
            }
            file_ids => {
                params.insert("file_ids", file_ids)?;
            }
        }
        match self.hashes.as_slice() {
            [] => (),
            [hash] => {
                params.insert("hash", hash)?;
            }
            hashes => {
                params.insert("hashes", hashes)?;
            }
        }
        Ok(())
    }

    /// The selection as a standalone parameter set
    pub fn to_params(&self) -> Result<ApiParams, HydrusError> {
        let mut params = ApiParams::new();
        self.write_params(&mut params)?;
        Ok(params)
    }
}

impl From<u64> for FileSelector {
    fn from(file_id: u64) -> Self {
        Self::from_id(file_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn wire(files: &FileSelector) -> Value {
        files.to_params().unwrap().into()
    }

    #[test]
    fn single_id_uses_singular_field() {
        assert_eq!(wire(&FileSelector::from_id(7)), json!({"file_id": 7}));
    }

    #[test]
    fn two_ids_use_plural_field() {
        let files = FileSelector::from_ids([7, 8]).unwrap();
        assert_eq!(wire(&files), json!({"file_ids": [7, 8]}));
    }

    #[test]
    fn single_hash_uses_singular_field() {
        let files = FileSelector::from_hashes(["abcd"]).unwrap();
        assert_eq!(wire(&files), json!({"hash": "abcd"}));
    }

    #[test]
    fn mixed_kinds_are_encoded_independently() {
        let files = FileSelector::new([1], ["aa", "bb"]).unwrap();
        assert_eq!(wire(&files), json!({"file_id": 1, "hashes": ["aa", "bb"]}));
    }

    #[test]
    fn empty_selection_is_rejected() {
        let err = FileSelector::new(Vec::<u64>::new(), Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, HydrusError::InvalidArgument(_)));
        assert!(FileSelector::from_hashes(Vec::<String>::new()).is_err());
    }

    #[test]
    fn plural_list_query_is_json() {
        let files = FileSelector::from_ids([3, 4]).unwrap();
        assert_eq!(files.to_params().unwrap().to_query(), "file_ids=%5B3%2C4%5D");
    }
}
