// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directory walking: find files by name.
//!
//! Walks everything by default, including hidden files and paths listed
//! in ignore files; sibling entries are visited in name order so
//! results are deterministic across platforms.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{Error, Result};

/// Options for [`find_file_by_name`] and [`find_all_by_name`].
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Match any file whose name contains the query as a substring.
    /// Forces full paths in results, overriding `dirs_only`.
    pub partial: bool,
    /// Return the containing directory instead of the file path.
    pub dirs_only: bool,
    /// Honor .gitignore and friends instead of walking everything.
    pub respect_ignore_files: bool,
}

/// Finds the first file named `name` under `root`, in walk order.
pub fn find_file_by_name(
    name: &str,
    root: impl AsRef<Path>,
    options: &FindOptions,
) -> Option<PathBuf> {
    matching_paths(name, root.as_ref(), options).next()
}

/// Finds every file named `name` under `root`, in walk order.
pub fn find_all_by_name(
    name: &str,
    root: impl AsRef<Path>,
    options: &FindOptions,
) -> Vec<PathBuf> {
    matching_paths(name, root.as_ref(), options).collect()
}

fn matching_paths<'a>(
    name: &'a str,
    root: &Path,
    options: &'a FindOptions,
) -> impl Iterator<Item = PathBuf> + 'a {
    let walker = WalkBuilder::new(root)
        .standard_filters(options.respect_ignore_files)
        .sort_by_file_name(|a: &OsStr, b: &OsStr| a.cmp(b))
        .build();

    walker.filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {err}");
                return None;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            return None;
        }
        // non-UTF-8 names cannot match a str query
        let file_name = entry.file_name().to_str()?;
        let hit = if options.partial { file_name.contains(name) } else { file_name == name };
        if !hit {
            return None;
        }
        if options.dirs_only && !options.partial {
            entry.path().parent().map(Path::to_path_buf)
        } else {
            Some(entry.path().to_path_buf())
        }
    })
}

/// Whether `path` is an existing directory with no entries.
///
/// Unlike the find functions this is an error-reporting operation: a
/// missing path or a non-directory is an `Err`, not `false`.
pub fn is_dir_empty(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| Error::read(path, e))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }
    let mut entries = fs::read_dir(path).map_err(|e| Error::read(path, e))?;
    Ok(entries.next().is_none())
}

/// Removes duplicates while preserving order.
///
/// With `keep_first` the first occurrence of each element keeps its
/// position, otherwise the last one does.
pub fn dedup_ordered<T>(items: Vec<T>, keep_first: bool) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    if keep_first {
        items.into_iter().filter(|item| seen.insert(item.clone())).collect()
    } else {
        let mut kept: Vec<T> =
            items.into_iter().rev().filter(|item| seen.insert(item.clone())).collect();
        kept.reverse();
        kept
    }
}

#[cfg(test)]
#[path = "walk_tests.rs"]
mod tests;
