//! Test helpers for writing site datasets into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Three sites one degree apart with identical metrics.
pub(super) const TRIANGLE_CSV: &str = "Location,Latitude,Longitude,Area,Vehicles,Footfall\n\
                                       A,0,0,10,10,10\n\
                                       B,0,1,10,10,10\n\
                                       C,1,0,10,10,10\n";

/// Seven Leeds sites, enough to exercise the default shortlist size.
pub(super) const LEEDS_CSV: &str = "Location,Latitude,Longitude,Area,Vehicles,Footfall\n\
                                    Leeds Dock,53.7914,-1.5329,1200,340,5100\n\
                                    Kirkstall,53.8155,-1.6050,2600,910,7400\n\
                                    Thorpe Park,53.8087,-1.4470,1800,620,3900\n\
                                    Headingley,53.8190,-1.5770,650,280,8800\n\
                                    Elland Road,53.7778,-1.5720,3100,1150,2500\n\
                                    White Rose,53.7580,-1.5780,2900,1320,9600\n\
                                    Roundhay,53.8390,-1.4990,400,90,6100\n";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(path, contents).expect("write fixture file");
}

/// A temporary directory addressed with UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write_dataset(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}
