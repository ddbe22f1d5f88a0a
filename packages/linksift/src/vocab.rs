//! Fixed heuristic vocabularies used by the harvester and classifier.
//!
//! Kept as named constant tables rather than inline literals so tests can
//! assert membership and alternate target-site heuristics can be swapped
//! in without touching control flow.

/// File extensions treated as downloadable content (archives, installers,
/// documents, media).
pub const DOWNLOAD_EXTENSIONS: &[&str] = &[
    ".zip", ".rar", ".7z", ".tar", ".gz", ".exe", ".msi", ".dmg", ".pkg", ".deb", ".rpm",
    ".apk", ".ipa", ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".mp4",
    ".mkv", ".avi", ".mov", ".mp3", ".wav", ".flac",
];

/// Image file extensions.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp", ".ico",
];

/// File-hosting service domains. Substring match against the URL host.
pub const HOSTING_DOMAINS: &[&str] = &[
    "hubcloud",
    "gdflix",
    "gdtot",
    "drive.google",
    "mega.nz",
    "mediafire",
    "dropbox",
    "onedrive",
    "box.com",
    "wetransfer",
    "sendspace",
    "zippyshare",
    "uploadhaven",
    "4shared",
    "rapidgator",
    "turbobit",
    "nitroflare",
    "gdlink",
    "gofile.io",
    "anonfiles",
    "catbox.moe",
    "pixeldrain",
    "krakenfiles",
    "upload.ee",
    "filebin.net",
    "temp.sh",
    "streamtape",
    "doodstream",
];

/// Social-platform domains for the loose categorizer.
pub const SOCIAL_DOMAINS: &[&str] = &[
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "linkedin.com",
    "youtube.com",
    "tiktok.com",
    "pinterest.com",
    "snapchat.com",
    "telegram.me",
    "t.me",
    "discord.gg",
    "reddit.com",
];

/// Streaming/media-platform domains for the loose categorizer.
pub const MEDIA_DOMAINS: &[&str] = &[
    "youtube.com",
    "vimeo.com",
    "dailymotion.com",
    "twitch.tv",
    "spotify.com",
    "soundcloud.com",
];

/// Terms that mark a link label as site navigation.
pub const NAV_TERMS: &[&str] = &["home", "about", "contact", "blog", "news", "menu"];

/// Path prefixes that mark a link as site navigation.
pub const NAV_PATHS: &[&str] = &["/home", "/about", "/contact", "/blog", "/news"];

/// Download-specific keywords checked against link text and URL.
pub const DOWNLOAD_KEYWORDS: &[&str] = &[
    "download",
    "direct-dl",
    "drive-login",
    "file/",
    "dl/",
    "hubcloud",
    "gdflix",
    "gdtot",
];

/// URL path fragments that commonly mark download endpoints.
pub const URL_PATH_MARKERS: &[&str] = &[
    "file/", "dl/", "download/", "/drive/", "/folder/", "/view/",
];

/// Subset of [`URL_PATH_MARKERS`] accepted by the final corroboration
/// clause of the strict filter.
pub const CORROBORATION_MARKERS: &[&str] = &["file/", "dl/", "download/", "/drive/"];

/// Negative-skip terms: any of these in the link text disqualifies it from
/// the strict download filter.
pub const SKIP_TERMS: &[&str] = &[
    "home", "about", "contact", "telegram", "facebook", "twitter", "instagram", "join",
    "channel", "support", "visit", "official", "website", "spot", "perfect", "thank",
    "sharing",
];

/// Negative-skip sites: any of these in the URL disqualifies it from the
/// strict download filter.
pub const SKIP_SITES: &[&str] = &[
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "t.me",
    "telegram.me",
    "moviesdrives.cv",
    "moviesdrive.cc",
];

/// Download-affinity hints for the image-in-anchor harvesting pass.
pub const IMAGE_BUTTON_HINTS: &[&str] = &[
    "download", "get", "hubcloud", "gdflix", "drive", "cloud",
];

/// True if the lower-cased path ends in one of the given extensions.
pub fn path_has_extension(path: &str, extensions: &[&str]) -> bool {
    extensions.iter().any(|ext| path.ends_with(ext))
}

/// True if the lower-cased haystack contains any of the given needles.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
