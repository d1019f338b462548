//! URL slug generation with Vietnamese diacritic folding.
//!
//! Titles on the site are predominantly Vietnamese; a plain
//! "strip non-alphanumerics" pass would drop most of the characters.
//! Diacritics are folded to their base ASCII letter first (including
//! đ/Đ → d), then the result is lowercased and hyphenated.

/// Fold a single lowercase Vietnamese character to its base ASCII letter.
///
/// Returns `None` for characters that need no folding.
fn fold_vietnamese(c: char) -> Option<char> {
    let base = match c {
        'à' | 'á' | 'ạ' | 'ả' | 'ã' | 'â' | 'ầ' | 'ấ' | 'ậ' | 'ẩ' | 'ẫ' | 'ă' | 'ằ' | 'ắ'
        | 'ặ' | 'ẳ' | 'ẵ' => 'a',
        'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ề' | 'ế' | 'ệ' | 'ể' | 'ễ' => 'e',
        'ì' | 'í' | 'ị' | 'ỉ' | 'ĩ' => 'i',
        'ò' | 'ó' | 'ọ' | 'ỏ' | 'õ' | 'ô' | 'ồ' | 'ố' | 'ộ' | 'ổ' | 'ỗ' | 'ơ' | 'ờ' | 'ớ'
        | 'ợ' | 'ở' | 'ỡ' => 'o',
        'ù' | 'ú' | 'ụ' | 'ủ' | 'ũ' | 'ư' | 'ừ' | 'ứ' | 'ự' | 'ử' | 'ữ' => 'u',
        'ỳ' | 'ý' | 'ỵ' | 'ỷ' | 'ỹ' => 'y',
        'đ' => 'd',
        _ => return None,
    };
    Some(base)
}

/// Generate a URL-friendly slug from a title.
///
/// Lowercases, folds Vietnamese diacritics to ASCII, collapses every
/// run of non-alphanumeric characters into a single hyphen, and trims
/// leading/trailing hyphens.
///
/// ```
/// use taramind_core::slug::generate_slug;
///
/// assert_eq!(generate_slug("Hệ Thống 999"), "he-thong-999");
/// assert_eq!(generate_slug("Hello, World!"), "hello-world");
/// ```
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for c in title.chars().flat_map(char::to_lowercase) {
        let folded = fold_vietnamese(c).unwrap_or(c);
        if folded.is_ascii_alphanumeric() {
            slug.push(folded);
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }

    slug.trim_end_matches('-').to_string()
}
