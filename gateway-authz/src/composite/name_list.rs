// Copyright 2023 The RocketMQ Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parsing of the comma separated child provider list.

use std::fmt;
use std::slice;

use cheetah_string::CheetahString;

/// Name of one child provider: a trimmed, non-empty token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProviderName(CheetahString);

impl ProviderName {
    /// Trims `name`; `None` when nothing is left.
    pub fn new(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(CheetahString::from(trimmed)))
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_cheetah_string(&self) -> &CheetahString {
        &self.0
    }

    /// Key prefix that namespaces this provider's parameters: the name
    /// followed by a literal dot.
    pub fn param_prefix(&self) -> String {
        format!("{}.", self.0)
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ProviderName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for ProviderName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ProviderName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Ordered child provider names. Duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderNameList(Vec<ProviderName>);

impl ProviderNameList {
    /// Splits `names` on commas, trimming every token and dropping blank
    /// ones. Absent, empty and all-whitespace input yield an empty list.
    pub fn parse(names: Option<&str>) -> Self {
        match names {
            Some(names) => Self(names.split(',').filter_map(ProviderName::new).collect()),
            None => Self::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ProviderName> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ProviderName> {
        self.0.get(index)
    }
}

impl fmt::Display for ProviderNameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(name.as_str())?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ProviderNameList {
    type Item = &'a ProviderName;
    type IntoIter = slice::Iter<'a, ProviderName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ProviderNameList {
    type Item = ProviderName;
    type IntoIter = std::vec::IntoIter<ProviderName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Shorthand for [`ProviderNameList::parse`].
pub fn parse_provider_names(names: Option<&str>) -> ProviderNameList {
    ProviderNameList::parse(names)
}
