//! System settings screen. Values are display-only apart from the theme.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::pages::SettingsPage;
use crate::ui::screens::{ScreenContext, page_block};
use crate::ui::theme::ThemeExt;

fn field<'a>(label: &'a str, value: String, ctx: &ScreenContext) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<22}"), ctx.theme.text_dim()),
        Span::styled(value, ctx.theme.text()),
    ])
}

pub fn render_settings(
    f: &mut Frame,
    area: Rect,
    page: &mut SettingsPage,
    ctx: ScreenContext,
) {
    let s = &page.settings;
    let [top, bottom] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
    let [identity_area, network_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(top);
    let [collection_area, system_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(bottom);

    let identity = vec![
        field("Gateway Name", s.gateway.name.clone(), &ctx),
        field("Gateway ID", s.gateway.id.clone(), &ctx),
        field(
            "Location",
            s.gateway
                .location
                .clone()
                .unwrap_or_else(|| "Not set".to_string()),
            &ctx,
        ),
        Line::raw(""),
        field("Theme", ctx.color_theme.display_name().to_string(), &ctx),
        Line::from(Span::styled("press t to cycle", ctx.theme.text_dim())),
    ];
    f.render_widget(
        Paragraph::new(identity).block(page_block("Gateway", &ctx)),
        identity_area,
    );

    let network = vec![
        field("IP Address", s.network.ip_address.clone(), &ctx),
        field("Subnet Mask", s.network.subnet_mask.clone(), &ctx),
        field("Default Gateway", s.network.default_gateway.clone(), &ctx),
    ];
    f.render_widget(
        Paragraph::new(network).block(page_block("Network", &ctx)),
        network_area,
    );

    let dc = &s.data_collection;
    let collection = vec![
        field("Polling Rate", format!("{} ms", dc.polling_rate_ms), &ctx),
        field("Buffer Size", format!("{} MB", dc.buffer_size_mb), &ctx),
        field("Data Retention", format!("{} days", dc.retention_days), &ctx),
        field(
            "Compression",
            if dc.compression { "Enabled" } else { "Disabled" }.to_string(),
            &ctx,
        ),
    ];
    f.render_widget(
        Paragraph::new(collection).block(page_block("Data Collection", &ctx)),
        collection_area,
    );

    let sys = &s.system;
    let system = vec![
        field("Firmware Version", sys.firmware_version.clone(), &ctx),
        field("Uptime", sys.uptime.clone(), &ctx),
        field("Last Backup", sys.last_backup.clone(), &ctx),
        field("Database Size", sys.database_size.clone(), &ctx),
    ];
    f.render_widget(
        Paragraph::new(system).block(page_block("System Information", &ctx)),
        system_area,
    );
}
