//! Explicit render-time environment and the variable context built from it.

use serde::{Deserialize, Serialize};
use md5::{Digest, Md5};

use crate::config::PracticeConfig;
use crate::resolver::ResourceDefinition;

use super::VariableContext;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseInfo {
    pub id: i64,
    pub full_name: String,
    pub short_name: String,
    pub id_number: String,
    pub summary: String,
    pub format: String,
}

/// Course-module placement of a practice instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleInfo {
    pub cmid: i64,
    pub id_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub full_name: String,
    /// Root URL of the site (`serverurl`).
    pub root: String,
}

/// The logged-in viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub id_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub icq: String,
    pub phone1: String,
    pub phone2: String,
    pub institution: String,
    pub department: String,
    pub address: String,
    pub city: String,
    /// Offset of the user's timezone from UTC, in seconds.
    pub utc_offset_secs: i32,
    pub url: String,
}

impl UserInfo {
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (_, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (false, false) => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// A course role as named in the course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleName {
    pub short_name: String,
    pub local_name: String,
}

impl RoleName {
    pub fn new(short_name: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            local_name: local_name.into(),
        }
    }

    /// Variable under which the localized name is exposed, e.g. `coursestudent`.
    pub fn variable_name(&self) -> String {
        format!("course{}", self.short_name)
    }
}

/// Everything a view request knows about its surroundings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderEnvironment {
    pub course: CourseInfo,
    pub module: ModuleInfo,
    pub site: SiteInfo,
    /// `None` for guests and anonymous viewers.
    pub user: Option<UserInfo>,
    pub lang: String,
    /// Current time as Unix seconds.
    pub now: i64,
    /// Viewer's IP address (used for `encryptedcode`).
    pub remote_addr: String,
    pub roles: Vec<RoleName>,
}

/// Lowercase hex MD5 of the viewer address concatenated with the secret phrase.
pub(crate) fn encrypted_code(remote_addr: &str, secret_phrase: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(remote_addr.as_bytes());
    hasher.update(secret_phrase.as_bytes());
    hex::encode(hasher.finalize())
}

fn timezone_hours(offset_secs: i32) -> String {
    (f64::from(offset_secs) / 3600.0).to_string()
}

impl VariableContext {
    /// Builds the values of every catalog variable available for this view.
    ///
    /// User variables are present only for a logged-in user, `encryptedcode`
    /// only with a secret phrase, role names only with `roles_in_params`.
    pub fn build(
        env: &RenderEnvironment,
        practice: &ResourceDefinition,
        config: &PracticeConfig,
    ) -> Self {
        let mut ctx = VariableContext::new();

        ctx.insert("courseid", env.course.id);
        ctx.insert("coursefullname", &env.course.full_name);
        ctx.insert("courseshortname", &env.course.short_name);
        ctx.insert("courseidnumber", &env.course.id_number);
        ctx.insert("coursesummary", &env.course.summary);
        ctx.insert("courseformat", &env.course.format);
        ctx.insert("lang", &env.lang);
        ctx.insert("sitename", &env.site.full_name);
        ctx.insert("serverurl", &env.site.root);
        ctx.insert("currenttime", env.now);
        ctx.insert("practiceinstance", practice.id);
        ctx.insert("practicecmid", env.module.cmid);
        ctx.insert("practicename", &practice.name);
        ctx.insert("practiceidnumber", &env.module.id_number);

        if let Some(user) = &env.user {
            ctx.insert("userid", user.id);
            ctx.insert("userusername", &user.username);
            ctx.insert("useridnumber", &user.id_number);
            ctx.insert("userfirstname", &user.first_name);
            ctx.insert("userlastname", &user.last_name);
            ctx.insert("userfullname", user.full_name());
            ctx.insert("useremail", &user.email);
            ctx.insert("usericq", &user.icq);
            ctx.insert("userphone1", &user.phone1);
            ctx.insert("userphone2", &user.phone2);
            ctx.insert("userinstitution", &user.institution);
            ctx.insert("userdepartment", &user.department);
            ctx.insert("useraddress", &user.address);
            ctx.insert("usercity", &user.city);
            ctx.insert("usertimezone", timezone_hours(user.utc_offset_secs));
            ctx.insert("userurl", &user.url);
        }

        if !config.secret_phrase.is_empty() {
            ctx.insert(
                "encryptedcode",
                encrypted_code(&env.remote_addr, &config.secret_phrase),
            );
        }

        if config.roles_in_params {
            for role in &env.roles {
                ctx.insert(role.variable_name(), &role.local_name);
            }
        }

        tracing::trace!(variables = ctx.len(), "built variable context");
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayMode;

    fn env(user: Option<UserInfo>) -> RenderEnvironment {
        RenderEnvironment {
            course: CourseInfo {
                id: 12,
                full_name: "Physics Lab".to_string(),
                short_name: "PHY101".to_string(),
                ..CourseInfo::default()
            },
            module: ModuleInfo {
                cmid: 77,
                id_number: "lab-1".to_string(),
            },
            site: SiteInfo {
                full_name: "Example University".to_string(),
                root: "http://lms.example.edu".to_string(),
            },
            user,
            lang: "en".to_string(),
            now: 1_700_000_000,
            remote_addr: "10.0.0.5".to_string(),
            roles: vec![RoleName::new("student", "Learner")],
        }
    }

    fn practice() -> ResourceDefinition {
        let mut def = ResourceDefinition::new("http://example.com", DisplayMode::Auto);
        def.id = 5;
        def.name = "Pendulum".to_string();
        def
    }

    #[test]
    fn course_site_and_module_values() {
        let ctx = VariableContext::build(&env(None), &practice(), &PracticeConfig::default());
        assert_eq!(ctx.get("courseid"), Some("12"));
        assert_eq!(ctx.get("courseshortname"), Some("PHY101"));
        assert_eq!(ctx.get("serverurl"), Some("http://lms.example.edu"));
        assert_eq!(ctx.get("currenttime"), Some("1700000000"));
        assert_eq!(ctx.get("practiceinstance"), Some("5"));
        assert_eq!(ctx.get("practicecmid"), Some("77"));
        assert_eq!(ctx.get("practicename"), Some("Pendulum"));
        assert!(ctx.get("userid").is_none());
        assert!(ctx.get("encryptedcode").is_none());
        assert!(ctx.get("coursestudent").is_none());
    }

    #[test]
    fn user_values_when_logged_in() {
        let user = UserInfo {
            id: 3,
            username: "jdoe".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            utc_offset_secs: 19_800,
            ..UserInfo::default()
        };
        let ctx = VariableContext::build(&env(Some(user)), &practice(), &PracticeConfig::default());
        assert_eq!(ctx.get("userid"), Some("3"));
        assert_eq!(ctx.get("userfullname"), Some("Jane Doe"));
        assert_eq!(ctx.get("usertimezone"), Some("5.5"));
    }

    #[test]
    fn whole_hour_timezone_has_no_fraction() {
        assert_eq!(timezone_hours(3600), "1");
        assert_eq!(timezone_hours(-18_000), "-5");
        assert_eq!(timezone_hours(0), "0");
    }

    #[test]
    fn encrypted_code_is_md5_hex() {
        assert_eq!(encrypted_code("", ""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(encrypted_code("ab", "c"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            encrypted_code("192.168.1.10", "The quick brown fox jumps over the lazy dog"),
            encrypted_code("192.168.1.10The quick brown fox", " jumps over the lazy dog")
        );
        assert_eq!(
            encrypted_code("The quick brown fox ", "jumps over the lazy dog"),
            "9e107d9d372bb6826bd81d3542a419d6"
        );
    }

    #[test]
    fn encrypted_code_and_roles() {
        let cfg = PracticeConfig {
            secret_phrase: "pepper".to_string(),
            roles_in_params: true,
            ..PracticeConfig::default()
        };
        let ctx = VariableContext::build(&env(None), &practice(), &cfg);
        let code = ctx.get("encryptedcode").unwrap();
        assert_eq!(code.len(), 32);
        assert_eq!(code, encrypted_code("10.0.0.5", "pepper"));
        assert_ne!(code, encrypted_code("10.0.0.6", "pepper"));
        assert_eq!(ctx.get("coursestudent"), Some("Learner"));
    }

    #[test]
    fn full_name_variants() {
        let mut user = UserInfo {
            first_name: "Ada".to_string(),
            ..UserInfo::default()
        };
        assert_eq!(user.full_name(), "Ada");
        user.last_name = "Lovelace".to_string();
        assert_eq!(user.full_name(), "Ada Lovelace");
    }
}
