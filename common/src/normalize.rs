//! 照合用テキスト正規化

/// 照合対象テキストを小文字化
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
}

/// キーワードをtrim・小文字化
///
/// 空白のみのキーワードは空文字になる。
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

/// 正規化済みキーワードが正規化済みテキストのいずれかに含まれるか
///
/// 空キーワードはどこにでも含まれてしまうため一致扱いしない。
pub fn keyword_hits(keyword: &str, haystacks: &[&str]) -> bool {
    !keyword.is_empty() && haystacks.iter().any(|h| h.contains(keyword))
}
