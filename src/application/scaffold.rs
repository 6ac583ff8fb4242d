//! Scaffold Use Cases
//!
//! Starter files for `wazctl config` and `wazctl rule new`, plus the
//! validation behind `wazctl rule check`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::RuleTest;
use crate::error::{WazctlError, WazctlResult};
use crate::infrastructure::fs::write_scaffold;

/// File written by `wazctl config`
pub const CONFIG_FILE_NAME: &str = ".wazctl.yaml";

const CONFIG_TEMPLATE: &str = r#"wazuh:
    endpoint: your-instance.com
    port: 55000
    protocol: https
    wuiPassword: password
    wuiUsername: wui
    httpDebug: false
    skipTlsVerify: true
indexer:
    endpoint: your-instance.com
    port: 9200
    protocol: https
    indexerPassword: password
    indexerUsername: wui
    httpDebug: false
    skipTlsVerify: true
local:
    repoVersion: 4.12.0
"#;

const RULE_TEMPLATE: &str = r#"ruleId: rule_001
ruleName: Unauthorized Access
ruleAuthor: John Doe
ruleContent: |-
  <rule id="100234" level="3">
      <if_sid>230</if_sid>
      <field name="alert_type">normal</field>
      <description>The file limit set for this agent is $(file_limit). Now, $(file_count) files are being monitored.</description>
      <group>syscheck,fim_db_state,</group>
  </rule>
description: Tests unauthorized access attempts
edges:
  - title: Invalid Login
    description: Simulate invalid login attempt
    command:
      type: bash
      value: |-
        ssh invalid@server
    expected_outcome: Rule triggers alert
"#;

/// Write `.wazctl.yaml` into `dir`
pub fn scaffold_config(dir: &Path, force: bool) -> WazctlResult<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    write_scaffold(&path, CONFIG_TEMPLATE, force)?;
    Ok(path)
}

/// Write a starter rule-test document named after `name`
pub fn scaffold_rule(dir: &Path, name: &str, force: bool) -> WazctlResult<PathBuf> {
    let path = dir.join(rule_file_name(name));
    write_scaffold(&path, RULE_TEMPLATE, force)?;
    Ok(path)
}

/// Parse and validate a rule-test document
pub fn check_rule(path: &Path) -> WazctlResult<RuleTest> {
    let content = fs::read_to_string(path)?;
    let invalid = |message: String| WazctlError::InvalidRuleTest {
        file: path.to_path_buf(),
        message,
    };

    let rule: RuleTest = serde_yaml_ng::from_str(&content).map_err(|e| invalid(e.to_string()))?;

    let problems = rule.problems();
    if !problems.is_empty() {
        return Err(invalid(problems.join("; ")));
    }
    Ok(rule)
}

fn rule_file_name(name: &str) -> String {
    let name = name.trim();
    if name.ends_with(".yaml") || name.ends_with(".yml") {
        name.to_string()
    } else {
        format!("{}.yaml", name)
    }
}
