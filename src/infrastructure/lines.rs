use crate::domain::ports::InputSource;
use async_trait::async_trait;
use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// Reads input one line at a time from any buffered async reader.
///
/// A line that is not valid UTF-8 fails that read only; the next call moves on
/// to the following line.
pub struct LineSource<R> {
    reader: R,
}

impl<R> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineSource<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl LineSource<BufReader<File>> {
    /// Opens a script file whose lines are fed to the machine as typed input.
    pub async fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path).await?;
        Ok(Self::new(BufReader::new(file)))
    }
}

#[async_trait]
impl<R> InputSource for LineSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_lines_without_terminators() {
        let mut source = LineSource::new("10c\r\n$2\ncancel".as_bytes());

        assert_eq!(source.next_line().await.unwrap(), Some("10c".to_string()));
        assert_eq!(source.next_line().await.unwrap(), Some("$2".to_string()));
        assert_eq!(source.next_line().await.unwrap(), Some("cancel".to_string()));
        assert_eq!(source.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_blank_line_is_empty_input() {
        let mut source = LineSource::new("\nA\n".as_bytes());

        assert_eq!(source.next_line().await.unwrap(), Some(String::new()));
        assert_eq!(source.next_line().await.unwrap(), Some("A".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_utf8_fails_single_read() {
        let bytes: &'static [u8] = b"\xff\xfe\n50c\n";
        let mut source = LineSource::new(bytes);

        let err = source.next_line().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(source.next_line().await.unwrap(), Some("50c".to_string()));
    }

    #[tokio::test]
    async fn test_open_script_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "$1").unwrap();
        writeln!(file, "terminate").unwrap();

        let mut source = LineSource::open(file.path()).await.unwrap();
        assert_eq!(source.next_line().await.unwrap(), Some("$1".to_string()));
        assert_eq!(
            source.next_line().await.unwrap(),
            Some("terminate".to_string())
        );
        assert_eq!(source.next_line().await.unwrap(), None);
    }
}
