use yew::prelude::*;

use crate::types::LogEntry;

const HEADER_CELL: &str = "padding:0.6em 1em; border-bottom:2px solid #ddd;";
const BODY_CELL: &str = "padding:0.6em 1em;";

#[derive(Properties, PartialEq)]
pub struct LogViewerProps {
    pub entries: Vec<LogEntry>,
}

/// Tabular listing of log entries, one row per entry in source order.
/// Rows are identified positionally; a reordered payload reorders rows.
#[function_component(LogViewer)]
pub fn log_viewer(props: &LogViewerProps) -> Html {
    html! {
        <div style="overflow-x:auto; background:#fff; border:1px solid #ddd; border-radius:4px;">
            <table style="width:100%; border-collapse:collapse; text-align:left;">
                <thead>
                    <tr style="background:#f5f5f5;">
                        <th style={HEADER_CELL}>{ "Time" }</th>
                        <th style={HEADER_CELL}>{ "Command" }</th>
                        <th style={HEADER_CELL}>{ "Transcript" }</th>
                        <th style={HEADER_CELL}>{ "Result" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.entries.iter().map(|entry| html! {
                        <tr style="border-top:1px solid #eee;">
                            <td style={BODY_CELL}>{ &entry.timestamp }</td>
                            <td style={BODY_CELL}>{ &entry.command }</td>
                            <td style={BODY_CELL}>{ &entry.transcript }</td>
                            <td style={BODY_CELL}>{ &entry.result }</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
