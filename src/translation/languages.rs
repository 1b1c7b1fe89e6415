//! 语言代码表
//!
//! Google 翻译接受的语言代码，以及代码规范化规则。

/// 自动检测源语言
pub const AUTO: &str = "auto";

/// 支持的语言代码（规范化后的小写形式）
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "af", "sq", "am", "ar", "hy", "az", "eu", "be", "bn", "bs", "bg", "ca", "ceb", "ny", "zh-cn",
    "zh-tw", "co", "hr", "cs", "da", "nl", "en", "eo", "et", "tl", "fi", "fr", "fy", "gl", "ka",
    "de", "el", "gu", "ht", "ha", "haw", "iw", "he", "hi", "hmn", "hu", "is", "ig", "id", "ga",
    "it", "ja", "jw", "kn", "kk", "km", "ko", "ku", "ky", "lo", "la", "lv", "lt", "lb", "mk", "mg",
    "ms", "ml", "mt", "mi", "mr", "mn", "my", "ne", "no", "or", "ps", "fa", "pl", "pt", "pa", "ro",
    "ru", "sm", "gd", "sr", "st", "sn", "sd", "si", "sk", "sl", "so", "es", "su", "sw", "sv", "tg",
    "ta", "te", "th", "tr", "uk", "ur", "ug", "uz", "vi", "cy", "xh", "yi", "yo", "zu",
];

/// 目标语言无效时依次尝试的中文代码
pub const CHINESE_FALLBACK_LOCALES: &[&str] = &["zh-cn", "zh-CN", "zh-TW", "zh-tw", "zh"];

/// 规范化语言代码：转小写并去掉 `_` 之后的地区后缀
pub fn normalize(code: &str) -> String {
    let lowered = code.trim().to_lowercase();
    match lowered.split_once('_') {
        Some((head, _)) => head.to_string(),
        None => lowered,
    }
}

/// 检查规范化后的代码是否受支持
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code)
}

/// 是否为中文语言代码
pub fn is_chinese_variant(code: &str) -> bool {
    code.to_lowercase().contains("zh")
}

/// 转换为 Google 接口使用的代码形式
pub fn wire_code(code: &str) -> String {
    match code.split_once('-') {
        Some((lang, region)) => format!("{}-{}", lang, region.to_uppercase()),
        None => code.to_string(),
    }
}
