//! HTML rendering for the finance page.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
    },
    navigation::NavBar,
};

use super::core::{InsertOutcome, LedgerEntry};

/// The max number of graphemes to display in the remark column before
/// truncating and displaying ellipses.
const MAX_REMARK_GRAPHEMES: usize = 32;

/// The raw filter text to echo back into the filter form inputs.
#[derive(Debug, Default, Clone)]
pub(crate) struct FilterInputs {
    pub start: String,
    pub end: String,
}

fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    }
}

pub(crate) fn finance_view(
    entries: &[LedgerEntry],
    total: f64,
    status: Option<&InsertOutcome>,
    filter_inputs: &FilterInputs,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::FINANCE_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-3xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Finance" }
                }

                @if let Some(outcome) = status {
                    (status_banner_view(outcome))
                }

                (filter_form_view(filter_inputs))

                section class="rounded bg-gray-50 dark:bg-gray-800 overflow-hidden"
                {
                    table class="w-full my-2 text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class="px-6 py-3 text-right" { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Remark" }
                            }
                        }

                        tbody
                        {
                            @if entries.is_empty() {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    td colspan="4" class="px-6 py-4 text-center"
                                    {
                                        "No entries."
                                    }
                                }
                            }

                            @for entry in entries {
                                (entry_row_view(entry))
                            }
                        }
                    }
                }

                p class="text-right font-semibold"
                {
                    "Total: "
                    span class=(amount_class(total)) { (format_currency(total)) }
                }

                (entry_form_view())
            }
        }
    };

    base("Finance", &content)
}

fn status_banner_view(outcome: &InsertOutcome) -> Markup {
    match outcome {
        InsertOutcome::Inserted => html! {
            p
                id="status-banner"
                class="p-4 rounded text-sm text-green-800 bg-green-50
                    dark:bg-gray-800 dark:text-green-400"
            {
                "Entry added."
            }
        },
        InsertOutcome::Rejected(reason) => html! {
            p
                id="status-banner"
                class="p-4 rounded text-sm text-red-800 bg-red-50
                    dark:bg-gray-800 dark:text-red-400"
            {
                "Entry could not be added: " (reason)
            }
        },
    }
}

fn filter_form_view(filter_inputs: &FilterInputs) -> Markup {
    html! {
        form method="get" action=(endpoints::FINANCE_VIEW) class="flex gap-4 items-end flex-wrap"
        {
            div
            {
                label for="start" class=(FORM_LABEL_STYLE) { "From" }
                input
                    type="date"
                    name="start"
                    id="start"
                    class=(FORM_TEXT_INPUT_STYLE)
                    value=(filter_inputs.start);
            }

            div
            {
                label for="end" class=(FORM_LABEL_STYLE) { "To" }
                input
                    type="date"
                    name="end"
                    id="end"
                    class=(FORM_TEXT_INPUT_STYLE)
                    value=(filter_inputs.end);
            }

            button type="submit" class="px-4 py-2 bg-blue-500 dark:bg-blue-600
                hover:bg-blue-600 hover:dark:bg-blue-700 text-white rounded"
            {
                "Filter"
            }
        }
    }
}

fn entry_row_view(entry: &LedgerEntry) -> Markup {
    let graphemes: Vec<&str> = entry.remark.graphemes(true).collect();
    let remark = if graphemes.len() > MAX_REMARK_GRAPHEMES {
        format!("{}...", graphemes[..MAX_REMARK_GRAPHEMES].concat())
    } else {
        entry.remark.clone()
    };

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (entry.date) }
            td class={ "px-6 py-4 text-right " (amount_class(entry.amount)) }
            {
                (format_currency(entry.amount))
            }
            td class=(TABLE_CELL_STYLE) { (entry.entry_type) }
            td class=(TABLE_CELL_STYLE) title=(entry.remark) { (remark) }
        }
    }
}

fn entry_form_view() -> Markup {
    html! {
        form method="post" action=(endpoints::FINANCE_VIEW) class="space-y-4"
        {
            h2 class="text-lg font-bold" { "Add Entry" }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                input
                    type="date"
                    name="date"
                    id="date"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required;
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    type="number"
                    name="amount"
                    id="amount"
                    step="0.01"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required;
            }

            div
            {
                label for="type" class=(FORM_LABEL_STYLE) { "Type" }
                input
                    type="text"
                    name="type"
                    id="type"
                    placeholder="groceries"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required;
            }

            div
            {
                label for="remark" class=(FORM_LABEL_STYLE) { "Remark" }
                input
                    type="text"
                    name="remark"
                    id="remark"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required;
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" }
        }
    }
}
