//! User and group name lookup from the system account databases

use std::collections::HashMap;
use std::fs;

use log::*;

const PASSWD_PATH: &str = "/etc/passwd";
const GROUP_PATH: &str = "/etc/group";

/// Maps numeric user and group ids to names.
///
/// Ids that are not listed resolve to their decimal form.
#[derive(Debug, Clone, Default)]
pub struct UserDb {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl UserDb {
    /// Load `/etc/passwd` and `/etc/group`. Unreadable files leave the
    /// corresponding table empty.
    pub fn load() -> Self {
        let passwd = fs::read_to_string(PASSWD_PATH).unwrap_or_else(|e| {
            debug!("{}: {}", PASSWD_PATH, e);
            String::new()
        });
        let group = fs::read_to_string(GROUP_PATH).unwrap_or_else(|e| {
            debug!("{}: {}", GROUP_PATH, e);
            String::new()
        });
        Self::from_sources(&passwd, &group)
    }

    /// Build from the text of passwd- and group-formatted files.
    pub fn from_sources(passwd: &str, group: &str) -> Self {
        Self {
            users: parse_id_table(passwd),
            groups: parse_id_table(group),
        }
    }

    pub fn user_name(&self, uid: u32) -> String {
        self.users
            .get(&uid)
            .cloned()
            .unwrap_or_else(|| uid.to_string())
    }

    pub fn group_name(&self, gid: u32) -> String {
        self.groups
            .get(&gid)
            .cloned()
            .unwrap_or_else(|| gid.to_string())
    }

    /// `"user group"`, as shown in long listings.
    pub fn owner_string(&self, uid: u32, gid: u32) -> String {
        format!("{} {}", self.user_name(uid), self.group_name(gid))
    }
}

/// Both files are `name:password:id:...` per line.
fn parse_id_table(text: &str) -> HashMap<u32, String> {
    let mut table = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split(':');
        let (Some(name), Some(_), Some(id)) = (fields.next(), fields.next(), fields.next()) else {
            continue;
        };
        if let Ok(id) = id.parse::<u32>() {
            // First entry wins, matching getpwuid
            table.entry(id).or_insert_with(|| name.to_string());
        }
    }
    table
}
