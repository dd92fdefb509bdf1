//! Per-page state.
//!
//! Responsibilities:
//! - Hold each page's own copy of its records plus local UI state
//!   (filters, selection, scan, form).
//! - Build fresh state for a route (`Page::for_route`).
//!
//! Does NOT handle:
//! - Key mapping (see `input`).
//! - Rendering (see `ui::screens`).
//!
//! Invariants:
//! - A page is rebuilt on every navigation, so query text, filters,
//!   acknowledgements and selections never survive leaving the page.
//! - Table selection always indexes the filtered view and is clamped after
//!   every filter change.

use gateway_client::models::{
    Alarm, DataPoint, Device, GatewayNode, Integration, MetricTile, ProtocolTemplate,
    RecentAlarm, Report, ReportTemplate, RoleSummary, SystemSettings, User,
};
use gateway_client::{
    AccountStatusFilter, AckFilter, AddDeviceForm, DiscoveryScan, EnabledFilter, FilterCategory,
    FilterState, LinkStatusFilter, Predicate, QualityFilter, Route, ScanError, Searchable,
    SeverityFilter, fixtures,
};
use ratatui::widgets::TableState;
use tokio_util::sync::CancellationToken;

/// Move a table selection one row, wrapping at both ends.
pub fn step_selection(table: &mut TableState, len: usize, forward: bool) {
    if len == 0 {
        table.select(None);
        return;
    }
    let next = match table.selected() {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };
    table.select(Some(next));
}

/// Keep a selection inside `0..len`, selecting the first row when possible.
pub fn clamp_selection(table: &mut TableState, len: usize) {
    match (len, table.selected()) {
        (0, _) => table.select(None),
        (_, None) => table.select(Some(0)),
        (len, Some(i)) if i >= len => table.select(Some(len - 1)),
        _ => {}
    }
}

fn table_for(len: usize) -> TableState {
    let mut table = TableState::default();
    clamp_selection(&mut table, len);
    table
}

/// Keys every searchable list page understands.
pub trait SearchPage {
    fn query(&self) -> &str;
    fn push_char(&mut self, c: char);
    fn pop_char(&mut self);
    fn clear_query(&mut self);
    fn cycle_category(&mut self);
    fn move_selection(&mut self, forward: bool);
}

/// A filtered, selectable table of records.
#[derive(Debug, Clone)]
pub struct ListPage<T, C> {
    pub records: Vec<T>,
    pub filter: FilterState<C>,
    pub table: TableState,
}

impl<T, C> ListPage<T, C>
where
    T: Searchable,
    C: FilterCategory + Predicate<T>,
{
    pub fn new(records: Vec<T>) -> Self {
        let table = table_for(records.len());
        Self {
            records,
            filter: FilterState::new(),
            table,
        }
    }

    /// Indices into `records` that pass the current filter.
    pub fn visible(&self) -> Vec<usize> {
        self.filter.indices(&self.records)
    }

    /// Index into `records` of the selected row.
    pub fn selected_record(&self) -> Option<usize> {
        self.visible().get(self.table.selected()?).copied()
    }

    fn clamp(&mut self) {
        let len = self.visible().len();
        clamp_selection(&mut self.table, len);
    }
}

impl<T, C> SearchPage for ListPage<T, C>
where
    T: Searchable,
    C: FilterCategory + Predicate<T>,
{
    fn query(&self) -> &str {
        self.filter.query()
    }

    fn push_char(&mut self, c: char) {
        self.filter.push_char(c);
        self.clamp();
    }

    fn pop_char(&mut self) {
        self.filter.pop_char();
        self.clamp();
    }

    fn clear_query(&mut self) {
        self.filter.clear_query();
        self.clamp();
    }

    fn cycle_category(&mut self) {
        self.filter.cycle_category();
        self.clamp();
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.visible().len();
        step_selection(&mut self.table, len, forward);
    }
}

pub type DevicesPage = ListPage<Device, LinkStatusFilter>;
pub type DataPage = ListPage<DataPoint, QualityFilter>;

/// Protocol templates with a locally toggleable enabled switch.
pub type ProtocolsPage = ListPage<ProtocolTemplate, EnabledFilter>;

impl ProtocolsPage {
    /// Flip the selected template's switch. Returns the template's new state.
    pub fn toggle_selected_enabled(&mut self) -> Option<(&str, bool)> {
        let index = self.selected_record()?;
        let template = &mut self.records[index];
        template.enabled = !template.enabled;
        let enabled = template.enabled;
        // The enabled filter may now hide the row.
        self.clamp();
        Some((self.records[index].name.as_str(), enabled))
    }
}

/// Alarm list with acknowledgement and severity filters.
#[derive(Debug, Clone)]
pub struct AlarmsPage {
    pub list: ListPage<Alarm, AckFilter>,
    pub severity: SeverityFilter,
}

impl AlarmsPage {
    pub fn new(alarms: Vec<Alarm>) -> Self {
        Self {
            list: ListPage::new(alarms),
            severity: SeverityFilter::default(),
        }
    }

    pub fn visible(&self) -> Vec<usize> {
        let extra: [&dyn Predicate<Alarm>; 1] = [&self.severity];
        self.list.filter.indices_with(&self.list.records, &extra)
    }

    fn clamp(&mut self) {
        let len = self.visible().len();
        clamp_selection(&mut self.list.table, len);
    }

    pub fn cycle_severity(&mut self) {
        self.severity = self.severity.next();
        self.clamp();
    }

    /// Acknowledge the selected alarm. Returns its device name when the
    /// alarm was newly acknowledged.
    pub fn acknowledge_selected(&mut self) -> Option<String> {
        let visible = self.visible();
        let index = *visible.get(self.list.table.selected()?)?;
        let alarm = &mut self.list.records[index];
        if !alarm.acknowledge() {
            return None;
        }
        let device = alarm.device.clone();
        self.clamp();
        Some(device)
    }
}

impl SearchPage for AlarmsPage {
    fn query(&self) -> &str {
        self.list.filter.query()
    }

    fn push_char(&mut self, c: char) {
        self.list.filter.push_char(c);
        self.clamp();
    }

    fn pop_char(&mut self) {
        self.list.filter.pop_char();
        self.clamp();
    }

    fn clear_query(&mut self) {
        self.list.filter.clear_query();
        self.clamp();
    }

    fn cycle_category(&mut self) {
        self.list.filter.cycle_category();
        self.clamp();
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.visible().len();
        step_selection(&mut self.list.table, len, forward);
    }
}

#[derive(Debug, Clone)]
pub struct UsersPage {
    pub list: ListPage<User, AccountStatusFilter>,
    pub roles: Vec<RoleSummary>,
}

#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub tiles: Vec<MetricTile>,
    pub nodes: Vec<GatewayNode>,
    pub recent_alarms: Vec<RecentAlarm>,
}

#[derive(Debug, Clone)]
pub struct ReportsPage {
    pub reports: Vec<Report>,
    pub templates: Vec<ReportTemplate>,
    pub table: TableState,
}

#[derive(Debug, Clone)]
pub struct IntegrationsPage {
    pub integrations: Vec<Integration>,
    pub table: TableState,
}

#[derive(Debug, Clone)]
pub struct SettingsPage {
    pub settings: SystemSettings,
}

/// Editable discovery scan parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanField {
    StartIp,
    EndIp,
    Timeout,
}

impl ScanField {
    pub const ALL: [ScanField; 3] = [ScanField::StartIp, ScanField::EndIp, ScanField::Timeout];

    pub fn label(self) -> &'static str {
        match self {
            ScanField::StartIp => "Start IP",
            ScanField::EndIp => "End IP",
            ScanField::Timeout => "Timeout (ms)",
        }
    }

    /// Editing order; `None` after the last field ends editing.
    pub fn next(current: Option<ScanField>) -> Option<ScanField> {
        match current {
            None => Some(ScanField::StartIp),
            Some(ScanField::StartIp) => Some(ScanField::EndIp),
            Some(ScanField::EndIp) => Some(ScanField::Timeout),
            Some(ScanField::Timeout) => None,
        }
    }
}

/// Discovery page: the scan state machine plus its cancellation token.
#[derive(Debug)]
pub struct DiscoveryPage {
    pub scan: DiscoveryScan,
    pub cursor: usize,
    pub editing: Option<ScanField>,
    cancel: Option<CancellationToken>,
}

impl DiscoveryPage {
    pub fn new() -> Self {
        Self {
            scan: DiscoveryScan::new(),
            cursor: 0,
            editing: None,
            cancel: None,
        }
    }

    /// Start a scan, returning its generation and a token the timer watches.
    pub fn start_scan(&mut self) -> Result<(u64, CancellationToken), ScanError> {
        let generation = self.scan.start()?;
        let token = CancellationToken::new();
        self.cancel = Some(token.clone());
        Ok((generation, token))
    }

    pub fn finish_scan(&mut self, generation: u64) -> bool {
        let finished = self.scan.finish(generation);
        if finished {
            self.cancel = None;
        }
        finished
    }

    /// Cancel a running scan and its timer.
    pub fn cancel_scan(&mut self) -> bool {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        self.scan.cancel()
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.scan.devices().len();
        if len == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
    }

    pub fn toggle_at_cursor(&mut self) -> Option<bool> {
        let id = self.scan.devices().get(self.cursor)?.id;
        self.scan.toggle_selected(id)
    }

    pub fn field_value(&self, field: ScanField) -> String {
        let config = self.scan.config();
        match field {
            ScanField::StartIp => config.start_ip.clone(),
            ScanField::EndIp => config.end_ip.clone(),
            ScanField::Timeout => config.timeout_ms.to_string(),
        }
    }

    /// Type into the field being edited. IPs take digits and dots, the
    /// timeout takes digits.
    pub fn edit_char(&mut self, c: char) {
        let Some(field) = self.editing else { return };
        let config = self.scan.config_mut();
        match field {
            ScanField::StartIp | ScanField::EndIp if c.is_ascii_digit() || c == '.' => {
                let target = if field == ScanField::StartIp {
                    &mut config.start_ip
                } else {
                    &mut config.end_ip
                };
                target.push(c);
            }
            ScanField::Timeout => {
                if let Some(digit) = c.to_digit(10) {
                    config.timeout_ms = config
                        .timeout_ms
                        .saturating_mul(10)
                        .saturating_add(u64::from(digit));
                }
            }
            _ => {}
        }
    }

    pub fn edit_backspace(&mut self) {
        let Some(field) = self.editing else { return };
        let config = self.scan.config_mut();
        match field {
            ScanField::StartIp => {
                config.start_ip.pop();
            }
            ScanField::EndIp => {
                config.end_ip.pop();
            }
            ScanField::Timeout => config.timeout_ms /= 10,
        }
    }
}

impl Default for DiscoveryPage {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct NotFoundPage {
    pub path: String,
    pub cursor: usize,
}

/// State of the page currently on screen.
#[derive(Debug)]
pub enum Page {
    Dashboard(DashboardPage),
    Devices(DevicesPage),
    AddDevice(AddDeviceForm),
    Discovery(DiscoveryPage),
    Alarms(AlarmsPage),
    Data(DataPage),
    Protocols(ProtocolsPage),
    Reports(ReportsPage),
    Integrations(IntegrationsPage),
    Users(UsersPage),
    Settings(SettingsPage),
    NotFound(NotFoundPage),
}

impl Page {
    /// Fresh state for `route`, populated from the fixtures.
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Dashboard => Page::Dashboard(DashboardPage {
                tiles: fixtures::metric_tiles(),
                nodes: fixtures::gateway_nodes(),
                recent_alarms: fixtures::recent_alarms(),
            }),
            Route::Devices => Page::Devices(ListPage::new(fixtures::devices())),
            Route::AddDevice => Page::AddDevice(AddDeviceForm::new()),
            Route::Discovery => Page::Discovery(DiscoveryPage::new()),
            Route::Alarms => Page::Alarms(AlarmsPage::new(fixtures::alarms())),
            Route::Data => Page::Data(ListPage::new(fixtures::data_points())),
            Route::Protocols => Page::Protocols(ListPage::new(fixtures::protocol_templates())),
            Route::Reports => {
                let reports = fixtures::recent_reports();
                Page::Reports(ReportsPage {
                    table: table_for(reports.len()),
                    reports,
                    templates: fixtures::report_templates(),
                })
            }
            Route::Integrations => {
                let integrations = fixtures::integrations();
                Page::Integrations(IntegrationsPage {
                    table: table_for(integrations.len()),
                    integrations,
                })
            }
            Route::Users => Page::Users(UsersPage {
                list: ListPage::new(fixtures::users()),
                roles: fixtures::roles(),
            }),
            Route::Settings => Page::Settings(SettingsPage {
                settings: fixtures::system_settings(),
            }),
            Route::NotFound(path) => Page::NotFound(NotFoundPage {
                path: path.clone(),
                cursor: 0,
            }),
        }
    }

    /// The page's search/filter surface, if it has one.
    pub fn search_mut(&mut self) -> Option<&mut dyn SearchPage> {
        match self {
            Page::Devices(page) => Some(page),
            Page::Alarms(page) => Some(page),
            Page::Data(page) => Some(page),
            Page::Protocols(page) => Some(page),
            Page::Users(page) => Some(&mut page.list),
            _ => None,
        }
    }

    pub fn has_search(&self) -> bool {
        matches!(
            self,
            Page::Devices(_) | Page::Alarms(_) | Page::Data(_) | Page::Protocols(_) | Page::Users(_)
        )
    }

    /// Text keys go to a form field rather than to commands.
    pub fn captures_text(&self) -> bool {
        matches!(self, Page::AddDevice(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_client::models::AlarmSeverity;
    use gateway_client::ValueFilter;

    #[test]
    fn test_step_selection_wraps() {
        let mut table = TableState::default();
        table.select(Some(2));
        step_selection(&mut table, 3, true);
        assert_eq!(table.selected(), Some(0));
        step_selection(&mut table, 3, false);
        assert_eq!(table.selected(), Some(2));
    }

    #[test]
    fn test_clamp_selection_empty_view() {
        let mut table = TableState::default();
        table.select(Some(4));
        clamp_selection(&mut table, 0);
        assert_eq!(table.selected(), None);
        clamp_selection(&mut table, 2);
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_device_search_narrows_and_clamps() {
        let mut page: DevicesPage = ListPage::new(fixtures::devices());
        page.table.select(Some(4));
        for c in "PLC".chars() {
            page.push_char(c);
        }
        assert_eq!(page.visible().len(), 1);
        assert_eq!(page.table.selected(), Some(0));
        assert_eq!(page.records[page.selected_record().unwrap()].name, "PLC-001");
    }

    #[test]
    fn test_alarm_acknowledge_then_unacknowledged_view_shrinks() {
        let mut page = AlarmsPage::new(fixtures::alarms());
        page.cycle_category();
        assert_eq!(page.list.filter.category(), AckFilter::Unacknowledged);
        assert_eq!(page.visible().len(), 3);

        let device = page.acknowledge_selected();
        assert!(device.is_some());
        assert_eq!(page.visible().len(), 2);
        assert_eq!(page.list.table.selected(), Some(0));
    }

    #[test]
    fn test_alarm_severity_combines_with_ack() {
        let mut page = AlarmsPage::new(fixtures::alarms());
        page.severity = ValueFilter::Only(AlarmSeverity::Critical);
        let visible = page.visible();
        assert!(
            visible
                .iter()
                .all(|&i| page.list.records[i].severity == AlarmSeverity::Critical)
        );
    }

    #[test]
    fn test_acknowledging_twice_is_noop() {
        let mut page = AlarmsPage::new(fixtures::alarms());
        let first = page.acknowledge_selected();
        let second = page.acknowledge_selected();
        assert!(first.is_some());
        assert!(second.is_none());
    }

    #[test]
    fn test_discovery_start_then_cancel_fires_token() {
        let mut page = DiscoveryPage::new();
        let (generation, token) = page.start_scan().unwrap();
        assert_eq!(generation, 1);
        assert!(page.start_scan().is_err());
        assert!(page.cancel_scan());
        assert!(token.is_cancelled());
        assert!(!page.scan.is_scanning());
    }

    #[test]
    fn test_discovery_field_editing() {
        let mut page = DiscoveryPage::new();
        page.editing = Some(ScanField::Timeout);
        page.edit_backspace();
        page.edit_char('7');
        page.edit_char('x');
        assert_eq!(page.field_value(ScanField::Timeout), "5007");

        page.editing = Some(ScanField::EndIp);
        page.edit_char('a');
        page.edit_backspace();
        assert_eq!(page.field_value(ScanField::EndIp), "192.168.1.25");
    }

    #[test]
    fn test_scan_field_cycle_ends_editing() {
        let mut field = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            field = ScanField::next(field);
            seen.push(field);
        }
        assert_eq!(seen.last(), Some(&None));
    }

    #[test]
    fn test_every_route_builds_a_page() {
        for route in Route::PAGES {
            let page = Page::for_route(route);
            assert_eq!(
                page.has_search(),
                matches!(
                    route,
                    Route::Devices | Route::Alarms | Route::Data | Route::Protocols | Route::Users
                )
            );
        }
    }
}
