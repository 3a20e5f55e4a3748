use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::PageProps;
use crate::error::ReportError;
use crate::models::ReportRecord;
use crate::services::{FetchTransport, ReportService};
use crate::utils::messages;
use crate::viewmodels::ReportViewModel;

pub enum ReportAction {
    BeginLoad,
    Loaded(Result<Vec<ReportRecord>, ReportError>),
    Search(String),
    ClearSearch,
    GoToPage(usize),
}

impl Reducible for ReportViewModel {
    type Action = ReportAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ReportAction::BeginLoad => {
                next.begin_load();
            }
            ReportAction::Loaded(result) => next.finish_load(result),
            ReportAction::Search(query) => next.set_query(&query),
            ReportAction::ClearSearch => next.clear_query(),
            ReportAction::GoToPage(page) => next.set_page(page),
        }
        Rc::new(next)
    }
}

#[function_component(ReportPage)]
pub fn report_page(_props: &PageProps) -> Html {
    let report = use_reducer(ReportViewModel::new);

    // Single fetch per mount
    {
        let report = report.clone();
        use_effect_with((), move |_| {
            report.dispatch(ReportAction::BeginLoad);
            wasm_bindgen_futures::spawn_local(async move {
                let service = ReportService::new(FetchTransport::new());
                let result = service.fetch_reports().await;
                report.dispatch(ReportAction::Loaded(result));
            });
            || ()
        });
    }

    let on_search = {
        let report = report.clone();
        Callback::from(move |e: InputEvent| {
            let query = e.target_unchecked_into::<HtmlInputElement>().value();
            report.dispatch(ReportAction::Search(query));
        })
    };
    let on_clear = {
        let report = report.clone();
        Callback::from(move |_: MouseEvent| report.dispatch(ReportAction::ClearSearch))
    };
    let on_previous = {
        let report = report.clone();
        let page = report.page();
        Callback::from(move |_: MouseEvent| {
            report.dispatch(ReportAction::GoToPage(page.saturating_sub(1)))
        })
    };
    let on_next = {
        let report = report.clone();
        let page = report.page();
        Callback::from(move |_: MouseEvent| report.dispatch(ReportAction::GoToPage(page + 1)))
    };

    let projection = report.projection();

    html! {
        <div class="report-screen">
            if report.is_failed() {
                <div class="alert alert-error" role="alert">{ messages::REPORT_ERROR_BANNER }</div>
            }
            <div class="report-search">
                <label for="report-search">{"Search:"}</label>
                <input
                    id="report-search"
                    type="search"
                    value={report.query().to_string()}
                    oninput={on_search}
                />
                <button type="button" class="btn-clear" aria-label="Clear search" onclick={on_clear}>
                    {"✕"}
                </button>
            </div>
            <table class="report-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Client"}</th>
                        <th>{"Grand Total"}</th>
                        <th>{"Paid Amount"}</th>
                        <th>{"Due Date"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for projection.rows.iter().enumerate().map(|(index, row)| render_row(index, row)) }
                </tbody>
            </table>
            <div class="report-pagination">
                <span class="page-label">{ report.page_label() }</span>
                <button type="button" disabled={!report.has_previous_page()} onclick={on_previous}>
                    {"‹"}
                </button>
                <button type="button" disabled={!report.has_next_page()} onclick={on_next}>
                    {"›"}
                </button>
            </div>
        </div>
    }
}

fn render_row(index: usize, row: &ReportRecord) -> Html {
    let class = if index % 2 == 0 { "row-shaded" } else { "row-plain" };
    html! {
        <tr key={row.id} {class}>
            <td>{ row.id }</td>
            <td>{ row.client.clone() }</td>
            <td>{ row.grand_total_label() }</td>
            <td>{ row.paid_amount_label() }</td>
            <td>{ row.due_date_label() }</td>
        </tr>
    }
}
