//! Merging of per-package benchmark result files.

use super::to_json_indented;
use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const BENCHMARKS_KEY: &str = "benchmarks";

/// Concatenate the `benchmarks` arrays of several result documents.
///
/// The envelope of the first document is kept. Documents without a
/// `benchmarks` field contribute nothing. Returns `None` when `documents`
/// is empty.
pub fn merge_documents(documents: Vec<Value>) -> Result<Option<Value>> {
    let mut documents = documents.into_iter();
    let mut merged = match documents.next() {
        Some(first) => first,
        None => return Ok(None),
    };

    let mut benchmarks = take_benchmarks(&mut merged, 0)?;
    for (index, mut doc) in documents.enumerate() {
        benchmarks.extend(take_benchmarks(&mut doc, index + 1)?);
    }

    if let Some(object) = merged.as_object_mut() {
        object.insert(BENCHMARKS_KEY.to_string(), Value::Array(benchmarks));
    }
    Ok(Some(merged))
}

fn take_benchmarks(doc: &mut Value, index: usize) -> Result<Vec<Value>> {
    let object = doc.as_object_mut().ok_or_else(|| {
        Error::InvalidData(format!("document {} is not a JSON object", index))
    })?;

    // Taken in place so the key keeps its position in the envelope.
    match object.get_mut(BENCHMARKS_KEY).map(std::mem::take) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(Error::InvalidData(format!(
            "document {}: `{}` is not an array",
            index, BENCHMARKS_KEY
        ))),
    }
}

/// Expand each input as a glob pattern, in order.
///
/// Patterns that match nothing, including plain paths that do not exist,
/// are skipped.
pub fn expand_inputs<Q: AsRef<Path>>(inputs: &[Q]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        let pattern = input.as_ref().to_string_lossy();
        let before = paths.len();
        for entry in glob::glob(&pattern)? {
            paths.push(entry.map_err(|e| Error::Io(e.into_error()))?);
        }
        if paths.len() == before {
            log::debug!("No files match {}, skipping", pattern);
        }
    }
    Ok(paths)
}

/// Merge result files into `output`, indented with four spaces.
///
/// Inputs are glob patterns expanded with [`expand_inputs`]. Returns the
/// number of merged benchmarks, or `None` (writing nothing) when no file
/// matched.
pub fn merge_files<P, Q>(output: P, inputs: &[Q]) -> Result<Option<usize>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let files = expand_inputs(inputs)?;
    let documents = files
        .iter()
        .map(|path| -> Result<Value> {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        })
        .collect::<Result<Vec<Value>>>()?;

    let merged = match merge_documents(documents)? {
        Some(merged) => merged,
        None => return Ok(None),
    };

    let count = merged[BENCHMARKS_KEY].as_array().map_or(0, Vec::len);
    fs::write(output.as_ref(), to_json_indented(&merged, 4)?)?;
    log::info!(
        "Merged {} benchmarks from {} files into {}",
        count,
        files.len(),
        output.as_ref().display()
    );
    Ok(Some(count))
}
