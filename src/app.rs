//! Reactor Panel App
//!
//! Live readings on top, protocol checklist and MgO calculator in tabs.

use checklist_store::{ChecklistStore, LoadOutcome};
use leptos::prelude::*;

use crate::components::{
    ActionBar, CalculatorForm, ChecklistAccordion, LivePanel, NoticeToast, Tab, TabBar, ThemeToggle,
    VerificationModal,
};
use crate::config::CHECKLIST_STORAGE_KEY;
use crate::context::{migration_notice, PanelContext};
use crate::export::CHECKLIST_CONTAINER_ID;
use crate::storage::BrowserStorage;
use crate::store::{PanelState, PanelStore};
use crate::{live, protocol, theme};

#[component]
pub fn App() -> impl IntoView {
    // Checklist state, migrated against the items rendered below
    let items = protocol::checklist_items();
    let LoadOutcome { store, migrations } = ChecklistStore::load(BrowserStorage, CHECKLIST_STORAGE_KEY, &items);
    log::info!(
        "[APP] loaded {} checklist records, {} migrations",
        store.state().items.len(),
        migrations.len()
    );

    let initial_theme = theme::initial_theme();
    theme::apply_theme(initial_theme);

    let ctx = PanelContext::new(store, items, initial_theme);
    provide_context(ctx);

    let panel_store = PanelStore::new(PanelState::default());
    provide_context(panel_store);

    for migration in &migrations {
        ctx.notify(migration_notice(migration));
    }

    live::connect(panel_store);

    let active_tab = RwSignal::new(Tab::Protocol);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Panel de Control del Reactor de Estruvita"</h1>
                <ThemeToggle />
            </header>

            <LivePanel />

            <TabBar active=active_tab />

            <main>
                <section
                    id=Tab::Protocol.panel_id()
                    role="tabpanel"
                    aria-labelledby=Tab::Protocol.id()
                    class=move || if active_tab.get() == Tab::Protocol { "tab-panel" } else { "tab-panel hidden" }
                >
                    <div id=CHECKLIST_CONTAINER_ID>
                        <h2>"Protocolo de verificación"</h2>
                        <ChecklistAccordion />
                    </div>
                    <ActionBar />
                </section>

                <section
                    id=Tab::Calculator.panel_id()
                    role="tabpanel"
                    aria-labelledby=Tab::Calculator.id()
                    class=move || if active_tab.get() == Tab::Calculator { "tab-panel" } else { "tab-panel hidden" }
                >
                    <h2>"Calculadora de MgO"</h2>
                    <CalculatorForm />
                </section>
            </main>

            <VerificationModal />
            <NoticeToast />
        </div>
    }
}
