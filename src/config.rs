//! Configuration constants and small text helpers.

use regex::Regex;
use std::sync::LazyLock;

/// Attribute value of the `str` element carrying the publication number.
///
/// Bundle exports identify each document by its publication/gazette number
/// (公開(公告)番号); `doc` elements without it are skipped.
pub const PUBLICATION_NUMBER_FIELD: &str = "公開(公告)番号";

/// Character budget for documents containing CJK text.
///
/// CJK text carries far more information per character than Latin text, so
/// the cap is lower to keep the summary within a model's context budget.
pub const CJK_CHAR_LIMIT: usize = 104_000;

/// Character budget for documents without CJK text.
pub const DEFAULT_CHAR_LIMIT: usize = 344_000;

/// File name of the composed summary, written next to the split documents.
pub const SUMMARY_FILE_NAME: &str = "まとめ.txt";

/// Section heading for the primary application.
pub const SECTION_APPLICATION: &str = "###本願";

/// Section heading for the rejection notice.
pub const SECTION_NOTICE: &str = "###拒絶理由通知";

/// Section heading for the amended claims (only present when supplied).
pub const SECTION_LATEST_CLAIMS: &str = "###最新の請求項";

/// Section heading prefix for cited references; the citation index follows.
pub const CITATION_SECTION_PREFIX: &str = "###引例";

/// Fixed instructional header placed at the top of the summary file.
///
/// Addresses the downstream reader (a language model) with the role
/// description and the ordered task instructions.
pub const SUMMARY_HEADER: &str = "###役割\n\
-あなたは、自動車技術全般に精通した技術者であり、特許法にも精通した弁理士です。\n\n\
###指示\n\
-本願を読み込んでください。\n\
-拒絶理由通知を読み込んでください。\n\
-引例を読み込んでください。\n\
-拒絶理由通知から審査官の意図を把握してください。\n\
-本願の請求項を構成ごとに分割し、引例の全文と比較して対比表を作成してください。\n\
-本願と引例の差異を明確化し、応答案（意見書、補正書）を提案してください。\n\
-最新の請求項がある場合には、最新の請求項を本願の請求項に代えて利用ください。\n\
-最新の請求項が無い場合には、本願の請求項を利用ください。\n\n";

/// CJK detection pattern: hiragana, katakana, and unified ideographs.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CJK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{3040}-\x{30FF}\x{4E00}-\x{9FFF}]").expect("valid regex"));

/// Check whether text contains any CJK code point.
///
/// # Examples
/// ```
/// use oa_prep::config::contains_cjk;
///
/// assert!(contains_cjk("特許請求の範囲"));
/// assert!(!contains_cjk("claims 1-5"));
/// ```
#[must_use]
pub fn contains_cjk(text: &str) -> bool {
    CJK_PATTERN.is_match(text)
}

/// Character budget for a piece of document text.
///
/// Returns [`CJK_CHAR_LIMIT`] when the text contains CJK code points,
/// [`DEFAULT_CHAR_LIMIT`] otherwise.
#[must_use]
pub fn char_limit_for(text: &str) -> usize {
    if contains_cjk(text) {
        CJK_CHAR_LIMIT
    } else {
        DEFAULT_CHAR_LIMIT
    }
}

/// Truncate text to at most `max_chars` characters.
///
/// Counts characters, not bytes, and makes no attempt to respect word or
/// sentence boundaries. Text shorter than the cap is returned unchanged.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

/// Sanitize a document identifier for use in a file name.
///
/// Publication numbers can contain `:` which is not portable in file names;
/// every occurrence is replaced with `_`.
///
/// # Examples
/// ```
/// use oa_prep::config::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("JP:2020-123456"), "JP_2020-123456");
/// assert_eq!(sanitize_identifier("特開2020-123456"), "特開2020-123456");
/// ```
#[must_use]
pub fn sanitize_identifier(identifier: &str) -> String {
    identifier.replace(':', "_")
}
