//! Shared pattern tables for boundary recognition.
//!
//! Both the boundary scanner and the fallback classifier dispatch on these
//! patterns in fixed order, so they live in one place rather than being
//! re-declared per component. Heading patterns for the clause hierarchy are
//! component-local to [`crate::hierarchy::heading`].

use regex::Regex;
use std::sync::LazyLock;

/// Exact table-of-contents heading: 目录 / 目 录 / TABLE OF CONTENTS / CONTENTS.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static TOC_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:目\s*录|TABLE OF CONTENTS|CONTENTS)\s*$").expect("valid regex")
});

/// Recital openers that start a preamble: 鉴于 / WHEREAS / 为了 / 兹就 / 根据 / 依据.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static PREAMBLE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:鉴于|WHEREAS|为了|兹就|根据|依据)").expect("valid regex"));

/// Chapter/article markers that can open the body: 第N章 / 第N条 / Chapter N / Article N.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static CHAPTER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:第[一二三四五六七八九十百]+[章条]|Chapter\s+\d+|Article\s+\d+)")
        .expect("valid regex")
});

/// Dotted leader followed by a page number, anywhere in a line.
///
/// Used on the lookahead window when rejecting chapter headings that sit
/// inside a table of contents.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static DOTTED_LEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{3,}\s*\d+").expect("valid regex"));

/// Dotted leader plus page number at end of line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static DOTTED_LEADER_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{3,}\s*\d+$").expect("valid regex"));

/// A full table-of-contents row: short title, dotted leader, page number.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static TOC_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.{1,50}\.{3,}\s*\d+$").expect("valid regex"));

/// Party signature line: 甲方/乙方 followed by a seal/sign verb and a colon.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static SIGNATURE_PARTY_CN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:甲方|乙方).*[盖章签字签署][:：]").expect("valid regex"));

/// Party signature line in Western form: Party A/B ... Signature:.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static SIGNATURE_PARTY_EN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Party\s*[AB].*(?:Signature|签字)[:：]").expect("valid regex")
});

/// Dedicated signature page markers: 签字盖章页 / 签署页 / SIGNATURE PAGE.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static SIGNATURE_PAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:签字盖章页|签署页|SIGNATURE\s*PAGE)").expect("valid regex")
});

/// Authorized-representative line, used by the fallback classifier only.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static AUTHORIZED_REP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:授权代表|Authorized\s*Representative)").expect("valid regex")
});

/// Attachment markers: 附件N / ANNEX N / APPENDIX N.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static ATTACHMENT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:附件[一二三四五六七八九十百0-9]+|ANNEX\s*\d+|APPENDIX\s*\d+)")
        .expect("valid regex")
});

/// Extra recital openers only the fallback classifier accepts.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static FALLBACK_PREAMBLE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:背景|前言)").expect("valid regex"));

/// Keywords marking a first line as a cover page.
pub(crate) const COVER_KEYWORDS: [&str; 8] = [
    "合同", "协议", "编号：", "no.", "甲方：", "乙方：", "买方：", "卖方：",
];

/// Literal seal markers that cut the body ahead of a signature block.
pub(crate) const SEAL_LITERALS: [&str; 2] = ["甲方（盖章）", "乙方（盖章）"];

/// Substrings whose presence anywhere in a line counts as a broad signature
/// indicator.
pub(crate) const SIGNATURE_HINTS: [&str; 3] = ["签字", "签署", "盖章"];
