use regex::Regex;

lazy_static::lazy_static! {
    static ref SCHEME_PREFIX: Regex = Regex::new(r"^https?://").expect("scheme regex");
}

/// 补全URL协议头，没有 http:// 或 https:// 时加上 https://
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// 去掉开头的 http:// 或 https://，crt.sh 只接受裸域名
pub fn strip_scheme(domain: &str) -> &str {
    match SCHEME_PREFIX.find(domain) {
        Some(m) => &domain[m.end()..],
        None => domain,
    }
}
