#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn hrledger_cmd() -> Command {
    let mut cmd = Command::cargo_bin("hrledger").unwrap();
    cmd.env_remove("HRLEDGER_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Ledger covering June 2025, with a few entries just outside the month
pub const SAMPLE_LEDGER: &str = r#"
[[employee]]
id = "E001"
name = "Nguyen Van A"
base_salary = 15000000

[[employee]]
id = "E002"
name = "Tran Thi B"
base_salary = 12000000

[[income]]
date = "2025-06-20"
amount = 1000000
description = "Consulting"

[[income]]
date = "2025-06-18"
amount = 50000
description = "Training"

[[income]]
date = "2025-06-15"
amount = 120000
description = "Support"

[[income]]
date = "2025-06-22"
amount = 25000
description = "Referral"

[[income]]
date = "2025-06-05"
amount = 75000
description = "License"

[[income]]
date = "2025-05-31"
amount = 999
description = "May income"

[[expense]]
date = "2025-06-03"
amount = 300000
description = "Rent"
category = "office"

[[expense]]
date = "2025-06-19"
amount = 45000
description = "Stationery"

[[payroll]]
employee_id = "E001"
date = "2025-06-10"
amount = 2000000
reason = "Project bonus"

[[payroll]]
employee_id = "E001"
date = "2025-06-17"
amount = -500000
reason = "Late arrival"

[[payroll]]
employee_id = "E002"
date = "2025-06-19"
amount = -300000
reason = "Unpaid leave"
"#;

pub fn write_ledger(dir: &Path) -> PathBuf {
    let path = dir.join("ledger.toml");
    fs::write(&path, SAMPLE_LEDGER).unwrap();
    path
}
