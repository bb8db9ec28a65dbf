//! Grouped list of variables an instructor can bind to URL parameters.

use crate::config::PracticeConfig;

use super::environment::RoleName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableOption {
    /// Symbolic variable name stored in the parameter binding.
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableGroup {
    pub label: String,
    pub options: Vec<VariableOption>,
}

fn group(label: &str, options: &[(&str, &str)]) -> VariableGroup {
    VariableGroup {
        label: label.to_string(),
        options: options
            .iter()
            .map(|(name, label)| VariableOption {
                name: name.to_string(),
                label: label.to_string(),
            })
            .collect(),
    }
}

/// Variables offered in the parameter editor.
///
/// `encryptedcode` is listed only with a secret phrase configured; role
/// variables only when `roles_in_params` is enabled.
pub fn variable_options(config: &PracticeConfig, roles: &[RoleName]) -> Vec<VariableGroup> {
    let mut groups = vec![
        group(
            "Course",
            &[
                ("courseid", "id"),
                ("coursefullname", "Course full name"),
                ("courseshortname", "Course short name"),
                ("courseidnumber", "Course ID number"),
                ("coursesummary", "Summary"),
                ("courseformat", "Format"),
            ],
        ),
        group(
            "Practice",
            &[
                ("practiceinstance", "id"),
                ("practicecmid", "cmid"),
                ("practicename", "Name"),
                ("practiceidnumber", "ID number"),
            ],
        ),
    ];

    let mut misc = group(
        "Miscellaneous",
        &[
            ("sitename", "Full site name"),
            ("serverurl", "Server URL"),
            ("currenttime", "Time"),
            ("lang", "Language"),
        ],
    );
    if !config.secret_phrase.is_empty() {
        misc.options.push(VariableOption {
            name: "encryptedcode".to_string(),
            label: "Encrypted code".to_string(),
        });
    }
    groups.push(misc);

    groups.push(group(
        "User",
        &[
            ("userid", "id"),
            ("userusername", "Username"),
            ("useridnumber", "ID number"),
            ("userfirstname", "First name"),
            ("userlastname", "Surname"),
            ("userfullname", "Full name"),
            ("useremail", "Email address"),
            ("usericq", "ICQ number"),
            ("userphone1", "Phone 1"),
            ("userphone2", "Phone 2"),
            ("userinstitution", "Institution"),
            ("userdepartment", "Department"),
            ("useraddress", "Address"),
            ("usercity", "City/town"),
            ("usertimezone", "Timezone"),
            ("userurl", "Web page"),
        ],
    ));

    if config.roles_in_params {
        groups.push(VariableGroup {
            label: "Roles".to_string(),
            options: roles
                .iter()
                .map(|role| VariableOption {
                    name: role.variable_name(),
                    label: format!("Your word for '{}'", role.local_name),
                })
                .collect(),
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(groups: &[VariableGroup]) -> Vec<String> {
        groups
            .iter()
            .flat_map(|g| g.options.iter().map(|o| o.name.clone()))
            .collect()
    }

    #[test]
    fn default_catalog() {
        let cfg = PracticeConfig::default();
        let groups = variable_options(&cfg, &[]);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["Course", "Practice", "Miscellaneous", "User"]);
        let names = names(&groups);
        assert!(names.contains(&"courseid".to_string()));
        assert!(names.contains(&"userfullname".to_string()));
        assert!(!names.contains(&"encryptedcode".to_string()));
    }

    #[test]
    fn secret_phrase_and_roles() {
        let cfg = PracticeConfig {
            secret_phrase: "pepper".to_string(),
            roles_in_params: true,
            ..PracticeConfig::default()
        };
        let roles = [RoleName::new("student", "Learner")];
        let groups = variable_options(&cfg, &roles);
        let names = names(&groups);
        assert!(names.contains(&"encryptedcode".to_string()));
        let roles_group = groups.last().unwrap();
        assert_eq!(roles_group.label, "Roles");
        assert_eq!(roles_group.options[0].name, "coursestudent");
        assert_eq!(roles_group.options[0].label, "Your word for 'Learner'");
    }
}
