//! End-to-end run: ODS archive → word records → exports and StarDict files.

use std::fs;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, info, trace};

use crate::dict::export;
use crate::dict::ods::{self, archive::ArchiveReader};
use crate::dict::stardict;
use crate::dict::types::error::Result;
use crate::dict::types::models::RunOptions;
use crate::dict::words::{DictionaryType, HeaderIndex, WordRecord};

/// Reads the data rows of `sheet_name` as word records of `dictionary_type`.
///
/// Rows without a headword, such as the blank filler rows spreadsheet
/// editors append, are skipped.
pub fn read_words<R: Read + Seek>(
    archive: &mut ArchiveReader<R>,
    sheet_name: &str,
    column_count: usize,
    dictionary_type: DictionaryType,
) -> Result<Vec<Box<dyn WordRecord>>> {
    let sheet = ods::read_sheet(archive, sheet_name, column_count)?;

    let header = dictionary_type
        .uses_header()
        .then(|| HeaderIndex::from_header(&sheet.header));
    if let Some(header) = &header {
        debug!("Header maps {} named columns.", header.len());
    }

    let factory = dictionary_type.factory();
    let row_count = sheet.rows.len();
    let words: Vec<Box<dyn WordRecord>> = sheet
        .rows
        .into_iter()
        .map(|row| factory(row, header.as_ref()))
        .filter(|word| word.is_valid_word())
        .collect();
    debug!("Skipped {} rows without a headword.", row_count - words.len());

    for word in &words {
        trace!(">>> {} => {}", word.sort_key(), word.toc_id());
    }
    info!("Read {} '{}' words.", words.len(), dictionary_type);
    Ok(words)
}

/// Files produced by one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub word_count: usize,
    pub written: Vec<PathBuf>,
}

/// `<dir>/<stem><suffix>.csv` for the input file.
fn csv_path(dir: &Path, ods_path: &Path, suffix: &str) -> PathBuf {
    let stem = ods_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    dir.join(format!("{}-{}.csv", stem, suffix))
}

/// Runs the whole conversion described by `options`.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    info!("------------------------------");
    info!(
        "Executing with odsFile={} sheetName={} columnCount={} odsType={}",
        options.ods_path.display(),
        options.sheet_name,
        options.column_count,
        options.dictionary_type
    );
    info!("------------------------------");

    let mut archive = ArchiveReader::open(&options.ods_path)?;
    let words = read_words(
        &mut archive,
        &options.sheet_name,
        options.column_count,
        options.dictionary_type,
    )?;

    let out_dir = options.resolved_output_dir();
    let mut summary = RunSummary {
        word_count: words.len(),
        written: Vec::new(),
    };

    if options.write_csv {
        fs::create_dir_all(&out_dir)?;
        let exports = [
            ("full", export::full_csv(&words)),
            ("vocab", export::vocab_csv(&words)),
            ("root", export::root_csv(&words)),
        ];
        for (suffix, bytes) in exports {
            let path = csv_path(&out_dir, &options.ods_path, suffix);
            fs::write(&path, &bytes)?;
            info!("Wrote {} ({} bytes)", path.display(), bytes.len());
            summary.written.push(path);
        }
    }

    if options.write_stardict {
        let info = options.dictionary_type.info();
        let entries: Vec<Box<dyn WordRecord>> = words
            .into_iter()
            .filter(|w| w.include_in_dictionary())
            .collect();
        let files = stardict::generate(&info, &entries, Utc::now())?;
        let written = files.write_to(&out_dir.join(&info.short_name), &info.short_name)?;
        summary.written.extend(written);
    }

    Ok(summary)
}
