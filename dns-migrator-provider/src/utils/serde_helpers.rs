//! 宽松的反序列化工具
//!
//! 源注册商的 API 对同一字段时而返回数字、时而返回字符串：
//! - ID: `17` 或 `"17"` -> `Some("17")`
//! - 数值: `3600` 或 `"3600"` -> `Some(3600)`
//! - 标志位: `true` / `1` / `"1"` -> `true`

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
}

/// 反序列化 Option<String>，接受字符串或整数
pub fn deserialize_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
            StringOrNumber::String(s) => s,
            StringOrNumber::U64(n) => n.to_string(),
            StringOrNumber::I64(n) => n.to_string(),
        }),
    )
}

/// 反序列化必填 String，接受字符串或整数
pub fn deserialize_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    deserialize_opt_string(deserializer)?.ok_or_else(|| Error::custom("expected string or number"))
}

/// 反序列化 Option<u32>，接受整数或数字字符串；空字符串视为缺失
pub fn deserialize_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(None),
        Some(StringOrNumber::String(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|e| Error::custom(format!("Invalid number '{s}': {e}"))),
        Some(StringOrNumber::U64(n)) => u32::try_from(n)
            .map(Some)
            .map_err(|_| Error::custom(format!("Number out of range: {n}"))),
        Some(StringOrNumber::I64(n)) => u32::try_from(n)
            .map(Some)
            .map_err(|_| Error::custom(format!("Number out of range: {n}"))),
    }
}

/// 反序列化布尔标志，接受 `true/false`、`0/1` 及其字符串形式；缺失视为 `false`
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(i64),
        String(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(Flag::Bool(b)) => Ok(b),
        Some(Flag::Number(n)) => Ok(n != 0),
        Some(Flag::String(s)) => match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" | "" => Ok(false),
            other => Err(Error::custom(format!("Invalid flag value: {other}"))),
        },
    }
}
