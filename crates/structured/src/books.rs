// ABOUTME: Constant book-ordinal tables for the structured-JSON adapter.
// ABOUTME: Maps canonical ordinals 1-66 to English short codes and Korean labels.

/// Number of books in the canon covered by the tables.
pub const BOOK_COUNT: usize = 66;

/// English short codes by canonical book ordinal (1-based), Genesis through
/// Revelation. These codes key the output verse references.
pub const ENGLISH_CODES: [&str; BOOK_COUNT] = [
    // Old Testament (39 books)
    "GEN", "EXO", "LEV", "NUM", "DEU", "JOS", "JDG", "RUT", "1SA", "2SA", "1KI", "2KI", "1CH",
    "2CH", "EZR", "NEH", "EST", "JOB", "PSA", "PRO", "ECC", "SNG", "ISA", "JER", "LAM", "EZK",
    "DAN", "HOS", "JOL", "AMO", "OBA", "JON", "MIC", "NAM", "HAB", "ZEP", "HAG", "ZEC", "MAL",
    // New Testament (27 books)
    "MAT", "MRK", "LUK", "JHN", "ACT", "ROM", "1CO", "2CO", "GAL", "EPH", "PHP", "COL", "1TH",
    "2TH", "1TI", "2TI", "TIT", "PHM", "HEB", "JAS", "1PE", "2PE", "1JN", "2JN", "3JN", "JUD",
    "REV",
];

/// Korean display labels by canonical book ordinal (1-based).
pub const KOREAN_ABBREVS: [&str; BOOK_COUNT] = [
    // 구약 39권
    "창", "출", "레", "민", "신", "수", "삿", "룻", "삼상", "삼하", "왕상", "왕하", "대상",
    "대하", "스", "느", "에", "욥", "시", "잠", "전", "아", "사", "렘", "애", "겔",
    "단", "호", "욜", "암", "옵", "욘", "미", "나", "합", "습", "학", "슥", "말",
    // 신약 27권
    "마", "막", "눅", "요", "행", "롬", "고전", "고후", "갈", "엡", "빌", "골", "살전",
    "살후", "딤전", "딤후", "딛", "몬", "히", "약", "벧전", "벧후", "요일", "요이", "요삼", "유",
    "계",
];

/// English short code for a 1-based book ordinal, if in range.
pub fn english_code(nr: u32) -> Option<&'static str> {
    table_lookup(&ENGLISH_CODES, nr)
}

/// Korean label for a 1-based book ordinal, if in range.
pub fn korean_abbrev(nr: u32) -> Option<&'static str> {
    table_lookup(&KOREAN_ABBREVS, nr)
}

fn table_lookup(table: &'static [&'static str; BOOK_COUNT], nr: u32) -> Option<&'static str> {
    let idx = usize::try_from(nr.checked_sub(1)?).ok()?;
    table.get(idx).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canon_boundaries() {
        assert_eq!(english_code(1), Some("GEN"));
        assert_eq!(english_code(39), Some("MAL"));
        assert_eq!(english_code(40), Some("MAT"));
        assert_eq!(english_code(66), Some("REV"));
    }

    #[test]
    fn test_out_of_range_ordinals() {
        assert_eq!(english_code(0), None);
        assert_eq!(english_code(67), None);
        assert_eq!(korean_abbrev(0), None);
        assert_eq!(korean_abbrev(67), None);
    }

    #[test]
    fn test_korean_labels_line_up() {
        assert_eq!(korean_abbrev(1), Some("창"));
        assert_eq!(korean_abbrev(19), Some("시"));
        assert_eq!(korean_abbrev(43), Some("요"));
        assert_eq!(korean_abbrev(66), Some("계"));
    }

    #[test]
    fn test_john_is_ordinal_43() {
        assert_eq!(english_code(43), Some("JHN"));
    }
}
