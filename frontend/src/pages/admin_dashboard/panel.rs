use crate::{components::layout::Layout, utils::navigation};
use leptos::*;
use rust_i18n::t;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Sellers,
    Customers,
}

impl Section {
    fn title_key(self) -> &'static str {
        match self {
            Section::Sellers => "admin.manage_sellers",
            Section::Customers => "admin.manage_customers",
        }
    }

    /// (label key, route) pairs listed under the section.
    fn links(self) -> [(&'static str, &'static str); 2] {
        match self {
            Section::Sellers => [
                ("admin.add_seller", navigation::ADMIN_SELLERS_NEW_PATH),
                ("admin.list_sellers", navigation::ADMIN_SELLERS_LIST_PATH),
            ],
            Section::Customers => [
                ("admin.add_customer", navigation::ADMIN_CUSTOMERS_NEW_PATH),
                ("admin.list_customers", navigation::ADMIN_CUSTOMERS_LIST_PATH),
            ],
        }
    }
}

/// Opening a section closes the other one.
pub fn toggled(current: Option<Section>, clicked: Section) -> Option<Section> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
fn SectionCard(section: Section, expanded: RwSignal<Option<Section>>) -> impl IntoView {
    let is_open = move || expanded.get() == Some(section);
    view! {
        <section class="rounded-xl bg-check-card shadow">
            <button
                type="button"
                class="w-full flex items-center justify-between px-5 py-4 text-left"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| expanded.update(|current| *current = toggled(*current, section))
            >
                <span class="text-lg font-semibold text-fg">{t!(section.title_key()).to_string()}</span>
                <span class="text-fg-muted">{move || if is_open() { "−" } else { "+" }}</span>
            </button>
            <Show when=is_open>
                <ul class="border-t border-border px-5 py-3 space-y-2">
                    {section
                        .links()
                        .into_iter()
                        .map(|(label, href)| view! {
                            <li>
                                <a href=href class="block rounded-lg px-3 py-2 text-check-blue hover:bg-surface-elevated">
                                    {t!(label).to_string()}
                                </a>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </Show>
        </section>
    }
}

#[component]
pub fn AdminDashboardPanel() -> impl IntoView {
    let expanded = create_rw_signal(None::<Section>);
    view! {
        <Layout admin=true>
            <div class="space-y-4">
                <h1 class="text-2xl font-bold text-fg">{t!("admin.title").to_string()}</h1>
                <SectionCard section=Section::Sellers expanded=expanded />
                <SectionCard section=Section::Customers expanded=expanded />
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_opens_one_section_at_a_time() {
        let open = toggled(None, Section::Sellers);
        assert_eq!(open, Some(Section::Sellers));
        assert_eq!(toggled(open, Section::Customers), Some(Section::Customers));
        assert_eq!(toggled(open, Section::Sellers), None);
    }
}
