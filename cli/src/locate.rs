//! Best-effort discovery of the Worms Armageddon `User/SavedLevels` folder.
//!
//! Steam libraries are searched first, then the usual boxed and GOG install
//! locations. Nothing here is guaranteed to find an install; callers fall back
//! to asking the user.
use indexmap::IndexSet;
use regex::Regex;
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

const GAME_DIR: &str = "Worms Armageddon";
const SUGGESTED_SUFFIX: &str = "_wa";

static LIBRARY_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""path"\s*"([^"]+)""#).expect("valid regex"));

/// Search roots for a W:A install.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Locator {
    steam_roots: Vec<PathBuf>,
    install_roots: Vec<PathBuf>,
}

impl Locator {
    /// Creates a locator that searches the given Steam roots (directories
    /// holding `steamapps`) and game install roots.
    #[inline]
    pub fn new(steam_roots: Vec<PathBuf>, install_roots: Vec<PathBuf>) -> Self {
        Self {
            steam_roots,
            install_roots,
        }
    }

    /// Creates a locator for the places the game is commonly installed on
    /// this machine.
    pub fn from_env() -> Self {
        let wsl = is_wsl();
        let install_roots = if cfg!(windows) || wsl {
            install_roots(wsl)
        } else {
            Vec::new()
        };
        Self::new(steam_roots(wsl), install_roots)
    }

    /// `steamapps` directories of every Steam library, without duplicates.
    pub fn steam_libraries(&self) -> Vec<PathBuf> {
        let mut libraries = IndexSet::new();
        for root in &self.steam_roots {
            let steamapps = root.join("steamapps");
            if !steamapps.is_dir() {
                continue;
            }
            let vdf = steamapps.join("libraryfolders.vdf");
            libraries.insert(steamapps);
            let Ok(text) = fs::read(&vdf) else {
                continue;
            };
            for library in parse_library_folders(&String::from_utf8_lossy(&text)) {
                let steamapps = library.join("steamapps");
                if steamapps.is_dir() {
                    libraries.insert(steamapps);
                }
            }
        }
        libraries.into_iter().collect()
    }

    /// Returns the first existing `User/SavedLevels` folder.
    pub fn saved_levels(&self) -> Option<PathBuf> {
        let steam = self.steam_libraries().into_iter().filter_map(|library| {
            let game = library.join("common").join(GAME_DIR);
            game.is_dir().then_some(game)
        });
        steam
            .chain(self.install_roots.iter().cloned())
            .map(|root| root.join("User").join("SavedLevels"))
            .find(|saved| saved.is_dir())
            .inspect(|saved| log::debug!("Found SavedLevels at {}", saved.display()))
    }
}

/// Looks for the SavedLevels folder in the usual places.
#[inline]
pub fn find_saved_levels() -> Option<PathBuf> {
    Locator::from_env().saved_levels()
}

/// Extracts library paths from the text of a Steam `libraryfolders.vdf`.
///
/// Both the legacy and the current layout store each library as a `"path"`
/// key, so any such value is taken.
pub fn parse_library_folders(text: &str) -> Vec<PathBuf> {
    LIBRARY_PATH
        .captures_iter(text)
        .map(|c| PathBuf::from(c[1].replace(r"\\", r"\")))
        .collect()
}

/// Proposes `<stem>_wa.png` inside `saved_levels`, or next to `input` when
/// the folder is unknown.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use wa_map_maker::locate::suggest_output_path;
///
/// assert_eq!(
///     suggest_output_path(Path::new("pics/cat.jpg"), None),
///     Path::new("pics/cat_wa.png"),
/// );
/// assert_eq!(
///     suggest_output_path(Path::new("pics/cat.jpg"), Some(Path::new("levels"))),
///     Path::new("levels/cat_wa.png"),
/// );
/// ```
pub fn suggest_output_path(input: &Path, saved_levels: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = format!("{stem}{SUGGESTED_SUFFIX}.png");
    match saved_levels {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

fn is_wsl() -> bool {
    fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|release| {
            let release = release.to_ascii_lowercase();
            release.contains("microsoft") || release.contains("wsl")
        })
        .unwrap_or(false)
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

fn steam_roots(wsl: bool) -> Vec<PathBuf> {
    let mut roots = ["PROGRAMFILES(X86)", "PROGRAMFILES", "PROGRAMW6432"]
        .into_iter()
        .filter_map(env::var_os)
        .map(|base| PathBuf::from(base).join("Steam"))
        .collect::<Vec<_>>();
    if wsl {
        let c = Path::new("/mnt/c");
        roots.push(c.join("Program Files (x86)").join("Steam"));
        roots.push(c.join("Program Files").join("Steam"));
    }
    if let Some(home) = home_dir() {
        roots.push(home.join(".steam").join("steam"));
        roots.push(home.join(".local").join("share").join("Steam"));
        roots.push(home.join("Steam"));
    }
    #[cfg(windows)]
    roots.extend(registry::steam_install_paths());
    roots
}

fn install_roots(wsl: bool) -> Vec<PathBuf> {
    let mut roots = ["PROGRAMFILES(X86)", "PROGRAMFILES"]
        .into_iter()
        .filter_map(env::var_os)
        .map(|base| PathBuf::from(base).join("Team17").join(GAME_DIR))
        .collect::<Vec<_>>();
    roots.extend(
        ["C:/Team17/Worms Armageddon", "C:/Worms Armageddon", "C:/GOG Games/Worms Armageddon"]
            .into_iter()
            .map(PathBuf::from),
    );
    if wsl {
        let c = Path::new("/mnt/c");
        roots.push(c.join("Team17").join(GAME_DIR));
        roots.push(c.join(GAME_DIR));
        roots.push(c.join("GOG Games").join(GAME_DIR));
    }
    roots
}

#[cfg(windows)]
mod registry {
    use std::path::PathBuf;
    use windows::{
        Win32::System::Registry::{
            HKEY, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, RRF_RT_REG_SZ, RegGetValueW,
        },
        core::HSTRING,
    };

    pub(super) fn steam_install_paths() -> Vec<PathBuf> {
        [
            (HKEY_CURRENT_USER, r"Software\Valve\Steam"),
            (HKEY_LOCAL_MACHINE, r"SOFTWARE\Wow6432Node\Valve\Steam"),
            (HKEY_LOCAL_MACHINE, r"SOFTWARE\Valve\Steam"),
        ]
        .into_iter()
        .filter_map(|(hive, subkey)| read_string(hive, subkey, "InstallPath"))
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .collect()
    }

    fn read_string(hive: HKEY, subkey: &str, value: &str) -> Option<String> {
        let subkey = HSTRING::from(subkey);
        let value = HSTRING::from(value);
        let mut len = 0u32;
        unsafe {
            RegGetValueW(
                hive,
                &subkey,
                &value,
                RRF_RT_REG_SZ,
                None,
                None,
                Some(&mut len as *mut u32),
            )
        }
        .ok()
        .ok()?;
        let mut buf = vec![0u16; (len as usize).div_ceil(2)];
        unsafe {
            RegGetValueW(
                hive,
                &subkey,
                &value,
                RRF_RT_REG_SZ,
                None,
                Some(buf.as_mut_ptr().cast()),
                Some(&mut len as *mut u32),
            )
        }
        .ok()
        .ok()?;
        let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
        Some(String::from_utf16_lossy(&buf[..end]))
    }
}
