// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use crate::csv::write_dataset;
use crate::data::{DataSet, GameRecord};
use crate::error::{Error, Result};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Config(format!("path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

/// Create the parent directory of `path` when it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(|e| Error::io(path, e))?; // truncate/overwrite
    Ok(BufWriter::new(file))
}

/// One URL per line; lines trimmed, blanks skipped.
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}

pub fn write_url_list(path: &Path, urls: &[String]) -> Result<()> {
    let mut out = create(path)?;
    for url in urls {
        writeln!(out, "{url}").map_err(|e| Error::io(path, e))?;
    }
    out.flush().map_err(|e| Error::io(path, e))
}

pub fn read_records(path: &Path) -> Result<Vec<GameRecord>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

/// Records as one pretty-printed JSON array.
pub fn write_records(path: &Path, records: &[GameRecord]) -> Result<()> {
    let mut out = create(path)?;
    serde_json::to_writer_pretty(&mut out, records)?;
    writeln!(out).map_err(|e| Error::io(path, e))?;
    out.flush().map_err(|e| Error::io(path, e))
}

pub fn write_table(path: &Path, data: &DataSet, sep: char) -> Result<()> {
    let mut out = create(path)?;
    write_dataset(&mut out, data, sep).map_err(|e| Error::io(path, e))?;
    out.flush().map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fields;

    #[test]
    fn url_list_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        fs::write(&path, "  https://a/1 \n\n\t\nhttps://a/2\r\n").unwrap();
        assert_eq!(read_url_list(&path).unwrap(), vec!["https://a/1", "https://a/2"]);
    }

    #[test]
    fn writers_create_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/games.json");

        let mut rec = GameRecord::new();
        rec.insert(fields::JAM_SITE, "Lyon");
        write_records(&path, &[rec.clone()]).unwrap();

        assert_eq!(read_records(&path).unwrap(), vec![rec]);
        assert!(fs::read_to_string(&path).unwrap().starts_with("[\n"));
    }

    #[test]
    fn directory_over_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "x").unwrap();
        assert!(matches!(ensure_directory(&file), Err(Error::Config(_))));
    }

    #[test]
    fn missing_input_names_the_path() {
        let err = read_url_list(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
