//! View command: plan the view and print a summary or the generated markup.

use anyhow::Result;
use practice_core::config::PracticeConfig;
use practice_core::practice_db::PracticeDb;
use practice_core::resolver::ResourceDefinition;
use practice_core::variables::{RenderEnvironment, VariableContext};
use practice_core::view::markup::{
    embed_markup, frameset_markup, workaround_markup, FramesetLabels,
};
use practice_core::view::{plan_view, should_print_intro, ViewPlan, ViewRequest, WindowTarget};
use std::path::Path;

use super::environment::load_environment;

pub async fn run_view(
    db: &PracticeDb,
    cfg: &PracticeConfig,
    id: i64,
    env_path: Option<&Path>,
    redirect: bool,
    from_editor: bool,
    html: bool,
) -> Result<()> {
    let practice = db.require_practice(id).await?;
    let env = load_environment(cfg, practice.course, env_path)?;
    let ctx = VariableContext::build(&env, &practice, cfg);
    let request = ViewRequest {
        cmid: env.module.cmid,
        redirect,
        from_editor,
    };

    let plan = plan_view(&practice, &ctx, cfg, request);
    tracing::debug!(practice = id, ?plan, "planned view");

    if html {
        println!("{}", render_plan(&plan, &practice, &env));
    } else {
        println!("{}", summarize_plan(&plan));
    }
    Ok(())
}

/// One-line description of a view plan.
pub(crate) fn summarize_plan(plan: &ViewPlan) -> String {
    match plan {
        ViewPlan::InvalidStored { notice } => format!("invalid: {notice}"),
        ViewPlan::Redirect { url } => format!("redirect: {url}"),
        ViewPlan::Embed {
            kind,
            url,
            mimetype,
            print_intro,
        } => format!("embed ({kind:?}, {mimetype}, intro={print_intro}): {url}"),
        ViewPlan::Frameset {
            nav_url,
            content_url,
            top_height,
        } => format!("frameset (top {top_height}px, nav {nav_url}): {content_url}"),
        ViewPlan::Workaround { url, window } => {
            let target = match window {
                WindowTarget::SameWindow => "same window".to_string(),
                WindowTarget::NewWindow => "new window".to_string(),
                WindowTarget::Popup { width, height } => format!("popup {width}x{height}"),
            };
            format!("click to open ({target}): {url}")
        }
    }
}

/// Page body (or whole document, for framesets) for a view plan.
pub(crate) fn render_plan(
    plan: &ViewPlan,
    practice: &ResourceDefinition,
    env: &RenderEnvironment,
) -> String {
    match plan {
        ViewPlan::InvalidStored { notice } => format!("<div class=\"notice\">{notice}</div>"),
        ViewPlan::Redirect { url } => format!("Location: {url}"),
        ViewPlan::Embed {
            kind,
            url,
            mimetype,
            print_intro,
        } => {
            let mut body = embed_markup(*kind, url, &practice.name, mimetype);
            if *print_intro && should_print_intro(practice, true) {
                body.push_str(&format!("\n<div class=\"intro\">{}</div>", practice.intro));
            }
            body
        }
        ViewPlan::Frameset {
            nav_url,
            content_url,
            top_height,
        } => {
            let title = format!("{}: {}", env.course.short_name, practice.name);
            let labels = FramesetLabels {
                title: &title,
                nav_title: "Practice",
                content_title: &practice.name,
                dir: "ltr",
            };
            frameset_markup(&labels, nav_url, content_url, *top_height)
        }
        ViewPlan::Workaround { url, window } => workaround_markup(url, *window),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use practice_core::display::DisplayMode;
    use practice_core::view::EmbedKind;

    #[test]
    fn summaries() {
        let plan = ViewPlan::Workaround {
            url: "http://example.com/".to_string(),
            window: WindowTarget::Popup {
                width: 620,
                height: 450,
            },
        };
        assert_eq!(
            summarize_plan(&plan),
            "click to open (popup 620x450): http://example.com/"
        );
        let plan = ViewPlan::Redirect {
            url: "http://example.com/?a=1&b=2".to_string(),
        };
        assert_eq!(summarize_plan(&plan), "redirect: http://example.com/?a=1&b=2");
    }

    #[test]
    fn frameset_title_uses_course_short_name() {
        let mut practice = ResourceDefinition::new("http://example.com/", DisplayMode::Frame);
        practice.name = "Pendulum".to_string();
        let mut env = RenderEnvironment::default();
        env.course.short_name = "PHY101".to_string();
        let plan = ViewPlan::Frameset {
            nav_url: "http://lms/mod/practice/view.php?id=4&amp;frameset=top".to_string(),
            content_url: "http://example.com/".to_string(),
            top_height: 130,
        };
        let html = render_plan(&plan, &practice, &env);
        assert!(html.contains("<title>PHY101: Pendulum</title>"));
        assert!(html.contains("rows=\"130,*\""));
    }

    #[test]
    fn embed_appends_intro_when_requested() {
        let mut practice = ResourceDefinition::new("http://example.com/a.png", DisplayMode::Embed);
        practice.intro = "<p>Look closely</p>".to_string();
        let env = RenderEnvironment::default();
        let plan = ViewPlan::Embed {
            kind: EmbedKind::Image,
            url: "http://example.com/a.png".to_string(),
            mimetype: "image/png",
            print_intro: true,
        };
        let html = render_plan(&plan, &practice, &env);
        assert!(html.contains("<img"));
        assert!(html.contains("Look closely"));
    }
}
