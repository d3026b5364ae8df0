/*
 * Fonts Module
 *
 * Resolves the font used for the title, legend and caption. The bundled
 * font shipped next to the executable is preferred; when it is missing the
 * system fonts below are tried in order. If nothing loads, text falls back
 * to nannou's built-in font. None of this is reported to the user beyond
 * the log.
 */

use anyhow::{anyhow, Context, Result};
use nannou::text::{self, Font};
use std::path::{Path, PathBuf};

pub const BUNDLED_FONT: &str = "fonts/SimHei.ttf";

// Preferred system fonts, highest priority first
pub const SYSTEM_FONTS: [&str; 3] = ["Microsoft YaHei", "SimHei", "Arial Unicode MS"];

fn system_font_files(name: &str) -> &'static [&'static str] {
    match name {
        "Microsoft YaHei" => &["msyh.ttc", "msyh.ttf"],
        "SimHei" => &["simhei.ttf", "SimHei.ttf"],
        "Arial Unicode MS" => &["Arial Unicode.ttf", "ARIALUNI.TTF"],
        _ => &[],
    }
}

fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(windir) = std::env::var_os("WINDIR") {
        dirs.push(PathBuf::from(windir).join("Fonts"));
    }
    dirs.push(PathBuf::from("/Library/Fonts"));
    dirs.push(PathBuf::from("/System/Library/Fonts/Supplemental"));
    dirs.push(PathBuf::from("/usr/share/fonts/truetype"));
    dirs.push(PathBuf::from("/usr/share/fonts"));
    if let Some(home) = std::env::var_os("HOME") {
        dirs.push(PathBuf::from(home).join(".fonts"));
    }
    dirs
}

/// Places the bundled font may live: beside the executable, then the
/// working directory.
pub fn bundled_font_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
        candidates.push(exe_dir.join(BUNDLED_FONT));
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(BUNDLED_FONT));
    }
    candidates
}

pub fn system_font_candidates() -> Vec<PathBuf> {
    let dirs = system_font_dirs();
    SYSTEM_FONTS
        .iter()
        .flat_map(|name| system_font_files(name).iter())
        .flat_map(|file| dirs.iter().map(move |dir| dir.join(file)))
        .collect()
}

pub fn load_font(path: &Path) -> Result<Font> {
    text::font::from_file(path)
        .map_err(|err| anyhow!("{:?}", err))
        .with_context(|| format!("failed to load font from {}", path.display()))
}

/// Load the first candidate that exists and parses.
pub fn first_loadable<I>(candidates: I) -> Option<(PathBuf, Font)>
where
    I: IntoIterator<Item = PathBuf>,
{
    for path in candidates {
        if !path.is_file() {
            log::debug!("No font at {}", path.display());
            continue;
        }

        match load_font(&path) {
            Ok(font) => return Some((path, font)),
            Err(err) => log::warn!("{:#}", err),
        }
    }
    None
}

pub fn resolve_font() -> Option<Font> {
    if let Some((path, font)) = first_loadable(bundled_font_candidates()) {
        log::info!("Using bundled font {}", path.display());
        return Some(font);
    }

    log::debug!("Bundled font {} not found, trying system fonts", BUNDLED_FONT);
    if let Some((path, font)) = first_loadable(system_font_candidates()) {
        log::info!("Using system font {}", path.display());
        return Some(font);
    }

    log::warn!("No preferred font available, using the built-in font");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_candidates_resolve_to_none() {
        let candidates = vec![
            PathBuf::from("/nonexistent/fonts/SimHei.ttf"),
            PathBuf::from("/nonexistent/fonts/msyh.ttc"),
        ];
        assert!(first_loadable(candidates).is_none());
    }

    #[test]
    fn test_load_font_error_names_path() {
        let path = std::env::temp_dir().join("descaling-not-a-font.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let err = load_font(&path).err().expect("garbage should not parse as a font");
        assert!(format!("{:#}", err).contains("descaling-not-a-font.ttf"));
        assert!(first_loadable(vec![path.clone()]).is_none());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_bundled_candidates_use_fonts_dir() {
        let candidates = bundled_font_candidates();
        assert!(!candidates.is_empty());
        for candidate in candidates {
            assert!(candidate.ends_with("fonts/SimHei.ttf"));
        }
    }

    #[test]
    fn test_system_candidates_follow_priority() {
        let candidates = system_font_candidates();
        let first_yahei = candidates.iter().position(|p| p.ends_with("msyh.ttc"));
        let first_simhei = candidates.iter().position(|p| p.ends_with("simhei.ttf"));
        assert!(first_yahei.unwrap() < first_simhei.unwrap());
    }
}
