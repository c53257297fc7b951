use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub number: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <div class="section-number">
                <span class="section-rule"></span>
                <span>{props.number}</span>
                <span class="section-rule"></span>
            </div>
            <h2>{props.title}</h2>
            <p>{props.subtitle}</p>
        </div>
    }
}
