use std::io::{BufRead, Write};

use serde_json::json;

use crate::data::{ContentType, ListItem};

use super::host::DirectoryHost;
use super::PluginError;

/// Text-mode host: every listing event is written as one JSON line, numeric
/// prompts are answered from `input`
pub struct ConsoleHost<W: Write, R: BufRead> {
    handle: i32,
    out: W,
    input: R,
    items: usize,
    finished: bool,
}

impl<W: Write, R: BufRead> ConsoleHost<W, R> {
    pub fn new(handle: i32, out: W, input: R) -> Self {
        ConsoleHost {
            handle,
            out,
            input,
            items: 0,
            finished: false,
        }
    }

    /// Number of rows added so far
    pub fn items(&self) -> usize {
        self.items
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn emit(&mut self, line: serde_json::Value) -> Result<(), PluginError> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }
}

impl<W: Write, R: BufRead> DirectoryHost for ConsoleHost<W, R> {
    fn add_directory_item(&mut self, url: &str, item: &ListItem, is_folder: bool) -> Result<(), PluginError> {
        self.items += 1;
        let line = json!({
            "type": "item",
            "handle": self.handle,
            "url": url,
            "folder": is_folder,
            "item": item,
        });
        self.emit(line)
    }

    fn set_content(&mut self, content: ContentType) -> Result<(), PluginError> {
        let line = json!({"type": "content", "handle": self.handle, "content": content});
        self.emit(line)
    }

    fn end_of_directory(&mut self) -> Result<(), PluginError> {
        self.finished = true;
        let line = json!({"type": "end", "handle": self.handle, "items": self.items});
        self.emit(line)?;
        self.out.flush()?;
        Ok(())
    }

    fn input_numeric(&mut self, heading: &str) -> Result<Option<String>, PluginError> {
        let line = json!({"type": "prompt", "handle": self.handle, "heading": heading});
        self.emit(line)?;
        self.out.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }

        let answer = answer.trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }
}
