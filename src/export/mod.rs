//! File exports
//!
//! This module contains:
//! - Indented JSON export of a single profile
//! - Guild roster CSV files (`Nickname,Ref`)
//! - Batch fetching of a roster into per-member JSON files
//! - Gearscore averaging over a folder of exported profiles

mod batch;
mod gearscore;
mod json;
mod roster;

pub use batch::{run_batch, BatchReport};
pub use gearscore::{average_folder, FolderAverage};
pub use json::{read_profile_json, save_profile_json, write_profile_json};
pub use roster::{read_roster, roster_path, write_roster};
