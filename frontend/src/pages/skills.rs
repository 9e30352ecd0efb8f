use yew::prelude::*;

use crate::components::logo_loop::{LogoItem, LogoLoop};
use crate::content::{LogoImage, Skills as SkillsContent};
use crate::marquee::Direction;
use crate::theme::use_theme;

const LOOP_SPEED: f64 = 50.0;
const LOGO_HEIGHT: u32 = 40;
const LOGO_GAP: u32 = 40;

fn items(logos: &[LogoImage]) -> Vec<LogoItem> {
    logos.iter().cloned().map(LogoItem::from).collect()
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub skills: SkillsContent,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let theme = use_theme();
    let rows = [
        ("Design Tools", &props.skills.design_tools, Direction::Left),
        ("Development", &props.skills.dev_tech, Direction::Right),
        ("Dev Tools", &props.skills.dev_tools, Direction::Left),
    ];

    html! {
        <section id="skills" class="skills-section">
            <div class="section-inner">
                <h2 class="section-title">{"Skills & "}<span class="accent">{"Tools"}</span></h2>
                { for rows.into_iter().map(|(label, logos, direction)| html! {
                    <div class="skills-row">
                        <LogoLoop
                            items={items(logos)}
                            speed={LOOP_SPEED}
                            {direction}
                            logo_height={LOGO_HEIGHT}
                            gap={LOGO_GAP}
                            scale_on_hover=true
                            fade_out=true
                            fade_out_color={theme.surface_color().to_string()}
                            aria_label={label.to_string()}
                        />
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .skills-section { padding: 6rem 0; background: var(--surface); overflow: hidden; }
                .skills-row { width: 100%; margin: 0 auto 2.5rem; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn every_logo_becomes_an_image_item() {
        let skills = content::load().unwrap().skills;
        let row = items(&skills.dev_tech);
        assert_eq!(row.len(), skills.dev_tech.len());
        assert!(row.iter().all(|item| matches!(item, LogoItem::Image(_))));
        assert_eq!(row[0].aria_label(), Some(skills.dev_tech[0].alt.as_str()));
    }
}
