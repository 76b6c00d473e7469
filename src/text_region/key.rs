// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// Symbolic name of one editable text span inside a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionKey {
    Label,
    Title,
    Content,
    Placeholder,
    Item(usize),
    Tab(usize),
    Link(usize),
    Col(usize),
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label => f.write_str("label"),
            Self::Title => f.write_str("title"),
            Self::Content => f.write_str("content"),
            Self::Placeholder => f.write_str("placeholder"),
            Self::Item(i) => write!(f, "item-{i}"),
            Self::Tab(i) => write!(f, "tab-{i}"),
            Self::Link(i) => write!(f, "link-{i}"),
            Self::Col(i) => write!(f, "col-{i}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionKeyError {
    Unknown(String),
    BadIndex(String),
}

impl fmt::Display for RegionKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(raw) => write!(f, "unknown text region key '{raw}'"),
            Self::BadIndex(raw) => write!(f, "invalid index in text region key '{raw}'"),
        }
    }
}

impl std::error::Error for RegionKeyError {}

impl FromStr for RegionKey {
    type Err = RegionKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "label" => return Ok(Self::Label),
            "title" => return Ok(Self::Title),
            "content" => return Ok(Self::Content),
            "placeholder" => return Ok(Self::Placeholder),
            _ => {}
        }

        let Some((prefix, index)) = s.split_once('-') else {
            return Err(RegionKeyError::Unknown(s.to_owned()));
        };
        let make: fn(usize) -> Self = match prefix {
            "item" => Self::Item,
            "tab" => Self::Tab,
            "link" => Self::Link,
            "col" => Self::Col,
            _ => return Err(RegionKeyError::Unknown(s.to_owned())),
        };
        let index = index.parse::<usize>().map_err(|_| RegionKeyError::BadIndex(s.to_owned()))?;
        Ok(make(index))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{RegionKey, RegionKeyError};

    #[rstest]
    #[case("label", RegionKey::Label)]
    #[case("placeholder", RegionKey::Placeholder)]
    #[case("item-3", RegionKey::Item(3))]
    #[case("tab-0", RegionKey::Tab(0))]
    #[case("link-12", RegionKey::Link(12))]
    #[case("col-1", RegionKey::Col(1))]
    fn parses_and_displays(#[case] raw: &str, #[case] key: RegionKey) {
        assert_eq!(raw.parse::<RegionKey>(), Ok(key));
        assert_eq!(key.to_string(), raw);
    }

    #[test]
    fn rejects_unknown_and_bad_index() {
        assert_eq!("body".parse::<RegionKey>(), Err(RegionKeyError::Unknown("body".into())));
        assert_eq!("item-x".parse::<RegionKey>(), Err(RegionKeyError::BadIndex("item-x".into())));
        assert_eq!("row-1".parse::<RegionKey>(), Err(RegionKeyError::Unknown("row-1".into())));
    }
}
