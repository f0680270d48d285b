//! Display model for a fetched page.
//!
//! A [`PageView`] is rebuilt from scratch on every successful load; the
//! previous one is dropped whole, never patched.

use crate::models::PageData;

/// Label used when the page's first verse has no chapter information.
pub const DEFAULT_SURAH_LABEL: &str = "سورة";

/// The opening invocation shown at the start of most chapters.
pub const BASMALA: &str = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ";

/// Chapter that never opens with the basmala.
const SURAH_TAWBAH: u32 = 9;

/// One verse ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseLine {
    pub text: String,
    pub number: u32,
}

/// Everything the renderer needs for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub page_number: u16,
    pub surah_name: String,
    pub content: Vec<VerseLine>,
    pub show_basmala: bool,
}

/// Map a raw verse collection into a [`PageView`].
///
/// The surah name and the basmala decision both come from the page's first
/// verse. A first verse without chapter info (or an empty page) gets the
/// default label and no basmala; chapter 9 gets no basmala either.
pub fn build_page_view(page_number: u16, data: &PageData) -> PageView {
    let first_surah = data.ayahs.first().and_then(|ayah| ayah.surah.as_ref());

    let surah_name = first_surah
        .map(|surah| surah.name.clone())
        .unwrap_or_else(|| DEFAULT_SURAH_LABEL.to_string());

    let show_basmala = first_surah.is_some_and(|surah| surah.number != SURAH_TAWBAH);

    let content = data
        .ayahs
        .iter()
        .map(|ayah| VerseLine {
            text: ayah.text.clone(),
            number: ayah.number_in_surah,
        })
        .collect();

    PageView {
        page_number,
        surah_name,
        content,
        show_basmala,
    }
}
