use std::{fs, path::Path};

use eyre::{Context, Result};
use log::trace;

/// Reads the ISBN list at `path`, one ISBN per line.
pub fn read_isbn_list(path: &Path) -> Result<Vec<String>> {
    trace!("Reading ISBN list from '{}'", path.display());
    fs::read_to_string(path)
        .wrap_err_with(|| format!("Cannot read the ISBN list '{}'", path.display()))
        .map(|content| parse_isbn_list(&content))
}

/// Splits `content` into ISBNs, trimming each line and skipping blank ones.
pub fn parse_isbn_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_fs::{fixture::FileWriteStr, NamedTempFile};

    #[test]
    fn lines_are_trimmed_and_blank_lines_skipped() {
        let isbns = parse_isbn_list("9784000000000\r\n\n  4000000000  \n\n");
        assert_eq!(vec!["9784000000000", "4000000000"], isbns);
    }

    #[test]
    fn isbns_are_not_validated() {
        let isbns = parse_isbn_list("978-4-00-000000-0\nnot an isbn\n");
        assert_eq!(vec!["978-4-00-000000-0", "not an isbn"], isbns);
    }

    #[test]
    fn read_isbn_list_from_file() {
        let file = NamedTempFile::new("isbnlist.txt").expect("Cannot create temp file for test");
        file.write_str("9784000000000\n9784000000001\n").unwrap();

        let isbns = read_isbn_list(file.path()).unwrap();
        file.close().unwrap();

        assert_eq!(vec!["9784000000000", "9784000000001"], isbns);
    }

    #[test]
    #[should_panic(expected = "Cannot read the ISBN list 'file does not exist.txt'")]
    fn err_when_isbn_list_does_not_exist() {
        read_isbn_list(Path::new("file does not exist.txt")).unwrap();
    }
}
