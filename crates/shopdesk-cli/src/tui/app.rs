//! Console host state: which screen is up, what is being typed, which row is
//! selected. Keys become [`Action`]s; everything else goes through
//! [`Console::dispatch`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use shopdesk_runtime::render::{RowAction, TableRow, facet_choices, sort_labels};
use shopdesk_runtime::{Console, Credentials, Entity, Intent, LoginOutcome, Outcome, Panel, PanelView, Screen, View};
use shopdesk_types::{OrderStatus, ReturnStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputPurpose {
    Search,
    GlobalSearch,
    ReportFrom,
    ReportTo { from: String },
    BulkStock,
    BulkStatus,
}

impl InputPurpose {
    pub fn prompt(&self) -> &'static str {
        match self {
            InputPurpose::Search => "Search",
            InputPurpose::GlobalSearch => "Search everywhere",
            InputPurpose::ReportFrom => "Report from (YYYY-MM)",
            InputPurpose::ReportTo { .. } => "Report to (YYYY-MM)",
            InputPurpose::BulkStock => "Set stock of ALL products to",
            InputPurpose::BulkStatus => "Set status of ALL orders to",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct InputLine {
    pub purpose: InputPurpose,
    pub buffer: String,
}

#[derive(Debug, Clone)]
pub(crate) enum Mode {
    Login(LoginForm),
    Browse,
    Input(InputLine),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    None,
    Quit,
    Login(Credentials),
    Logout,
    Dispatch(Intent),
}

pub(crate) struct App {
    pub console: Console,
    pub mode: Mode,
    pub selected: usize,
    /// Focused field of the open modal form.
    pub form_field: usize,
    /// Host-side feedback, e.g. a rejected outcome.
    pub hint: Option<String>,
    quit: bool,
}

impl App {
    pub fn new(mut console: Console) -> Self {
        let mode = match console.gate() {
            Screen::Login => Mode::Login(LoginForm::default()),
            Screen::Shell => Mode::Browse,
        };
        Self {
            console,
            mode,
            selected: 0,
            form_field: 0,
            hint: None,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        self.hint = None;
        match self.mode {
            Mode::Login(_) => return self.on_login_key(key),
            Mode::Input(_) => return self.on_input_key(key),
            Mode::Browse => {}
        }
        if self.console.prompt().is_some() {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => Action::Dispatch(Intent::Confirm),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::Dispatch(Intent::Decline),
                _ => Action::None,
            };
        }
        if self.console.modal().is_open() {
            return self.on_form_key(key);
        }
        if self.console.overlay().is_some() {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Action::Dispatch(Intent::CloseOverlay),
                _ => Action::None,
            };
        }
        self.on_browse_key(key)
    }

    pub async fn perform(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.quit = true,
            Action::Login(credentials) => {
                if self.console.login(&credentials).await == LoginOutcome::Success {
                    self.mode = Mode::Browse;
                    self.selected = 0;
                }
            }
            Action::Logout => {
                self.console.logout();
                self.mode = Mode::Login(LoginForm::default());
            }
            Action::Dispatch(intent) => {
                match &intent {
                    Intent::Navigate(_) | Intent::GlobalSearch(_) => self.selected = 0,
                    Intent::OpenCreate(_) | Intent::OpenEdit(..) => self.form_field = 0,
                    _ => {}
                }
                if let Outcome::Rejected(message) = self.console.dispatch(intent).await {
                    self.hint = Some(message);
                }
            }
        }
    }

    /// Rows of the active view's table, when it shows one.
    pub fn table_rows(&self) -> &[TableRow] {
        let table = self
            .console
            .router()
            .active_view()
            .and_then(Panel::table_of)
            .and_then(|panel| self.console.canvas().get(panel));
        match table {
            Some(PanelView::Table(table)) => &table.rows,
            _ => &[],
        }
    }

    pub fn selected_row(&self) -> Option<&TableRow> {
        let rows = self.table_rows();
        rows.get(self.selected.min(rows.len().saturating_sub(1)))
    }

    fn row_with(&self, action: RowAction) -> Option<u64> {
        self.selected_row()
            .filter(|row| row.actions.contains(&action))
            .map(|row| row.id)
    }

    fn on_login_key(&mut self, key: KeyEvent) -> Action {
        let Mode::Login(form) = &mut self.mode else {
            return Action::None;
        };
        let field = match form.focus {
            LoginField::Username => &mut form.username,
            LoginField::Password => &mut form.password,
        };
        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                form.focus = match form.focus {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
            }
            KeyCode::Enter if form.focus == LoginField::Username => form.focus = LoginField::Password,
            KeyCode::Enter => {
                return Action::Login(Credentials {
                    username: form.username.clone(),
                    password: form.password.clone(),
                });
            }
            KeyCode::Backspace => {
                field.pop();
            }
            KeyCode::Char(c) => field.push(c),
            _ => {}
        }
        Action::None
    }

    fn on_input_key(&mut self, key: KeyEvent) -> Action {
        let Mode::Input(line) = &mut self.mode else {
            return Action::None;
        };
        match key.code {
            KeyCode::Esc => {
                let clear_search = line.purpose == InputPurpose::Search;
                self.mode = Mode::Browse;
                if clear_search {
                    return Action::Dispatch(Intent::SearchChanged(String::new()));
                }
                Action::None
            }
            KeyCode::Enter => {
                let line = line.clone();
                self.mode = Mode::Browse;
                self.commit(line)
            }
            KeyCode::Backspace => {
                line.buffer.pop();
                live_search(line)
            }
            KeyCode::Char(c) => {
                line.buffer.push(c);
                live_search(line)
            }
            _ => Action::None,
        }
    }

    fn commit(&mut self, line: InputLine) -> Action {
        let text = line.buffer.trim().to_string();
        match line.purpose {
            InputPurpose::Search => Action::None,
            InputPurpose::GlobalSearch => Action::Dispatch(Intent::GlobalSearch(text)),
            InputPurpose::ReportFrom => {
                let to = self
                    .console
                    .active()
                    .and_then(|ctx| ctx.report_range.as_ref())
                    .map(|range| range.to.clone())
                    .unwrap_or_default();
                self.mode = Mode::Input(InputLine {
                    purpose: InputPurpose::ReportTo { from: text },
                    buffer: to,
                });
                Action::None
            }
            InputPurpose::ReportTo { from } => Action::Dispatch(Intent::RunReport { from, to: text }),
            InputPurpose::BulkStock => match text.parse::<u64>() {
                Ok(stock) => Action::Dispatch(Intent::BulkUpdateStock(stock)),
                Err(_) => {
                    self.hint = Some("Stock must be a whole number of zero or more".to_string());
                    Action::None
                }
            },
            InputPurpose::BulkStatus => match OrderStatus::parse(&text) {
                OrderStatus::Other(raw) => {
                    let known: Vec<&str> = OrderStatus::KNOWN.iter().map(OrderStatus::as_str).collect();
                    self.hint = Some(format!("Unknown status \"{}\" (use {})", raw, known.join(", ")));
                    Action::None
                }
                status => Action::Dispatch(Intent::BulkUpdateOrderStatus(status)),
            },
        }
    }

    fn on_form_key(&mut self, key: KeyEvent) -> Action {
        let Some(form) = self.console.modal().form() else {
            return Action::None;
        };
        let count = form.fields.len().max(1);
        let index = self.form_field.min(count - 1);
        let Some(field) = form.fields.get(index) else {
            return Action::None;
        };
        let edit = |value: String| {
            Action::Dispatch(Intent::EditField {
                field: field.key.to_string(),
                value,
            })
        };

        match key.code {
            KeyCode::Esc => Action::Dispatch(Intent::CancelForm),
            KeyCode::Enter => Action::Dispatch(Intent::SubmitForm),
            KeyCode::Tab | KeyCode::Down => {
                self.form_field = (index + 1) % count;
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form_field = (index + count - 1) % count;
                Action::None
            }
            KeyCode::Left | KeyCode::Right if field.key == "seller" && !form.seller_choices.is_empty() => {
                let choices = &form.seller_choices;
                let current = choices
                    .iter()
                    .position(|(id, _)| id.to_string() == field.value)
                    .unwrap_or(0);
                let next = if key.code == KeyCode::Right {
                    (current + 1) % choices.len()
                } else {
                    (current + choices.len() - 1) % choices.len()
                };
                edit(choices[next].0.to_string())
            }
            KeyCode::Backspace => {
                let mut value = field.value.clone();
                value.pop();
                edit(value)
            }
            KeyCode::Char(c) if field.key != "seller" => edit(format!("{}{}", field.value, c)),
            _ => Action::None,
        }
    }

    fn on_browse_key(&mut self, key: KeyEvent) -> Action {
        let Some(view) = self.console.router().active_view() else {
            return Action::None;
        };
        let position = View::ALL.iter().position(|v| *v == view).unwrap_or(0);
        let entity = match view {
            View::Products => Some(Entity::Product),
            View::Sellers => Some(Entity::Seller),
            _ => None,
        };

        let intent = match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('L') => return Action::Logout,
            KeyCode::Char(c @ '1'..='9') => View::ALL.get(c as usize - '1' as usize).copied().map(Intent::Navigate),
            KeyCode::Tab => Some(Intent::Navigate(View::ALL[(position + 1) % View::ALL.len()])),
            KeyCode::BackTab => Some(Intent::Navigate(
                View::ALL[(position + View::ALL.len() - 1) % View::ALL.len()],
            )),
            KeyCode::Char('r') => Some(Intent::Refresh),
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.table_rows().len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Char('/') if view.has_records() => {
                let buffer = self.console.active().map(|ctx| ctx.query.search.clone()).unwrap_or_default();
                self.begin_input(InputPurpose::Search, buffer);
                None
            }
            KeyCode::Char('g') => {
                self.begin_input(InputPurpose::GlobalSearch, String::new());
                None
            }
            KeyCode::Char('f') => self.next_facet(),
            KeyCode::Char('s') => {
                let keys = sort_labels(view).len();
                let current = self.console.active().map(|ctx| ctx.query.sort).unwrap_or(0);
                (keys > 1).then(|| Intent::SortChanged((current + 1) % keys))
            }
            KeyCode::Char('n') => entity.map(Intent::OpenCreate),
            KeyCode::Char('e') => entity.zip(self.row_with(RowAction::Edit)).map(|(e, id)| Intent::OpenEdit(e, id)),
            KeyCode::Char('d') => entity.zip(self.row_with(RowAction::Delete)).map(|(e, id)| Intent::Delete(e, id)),
            KeyCode::Enter => match view {
                View::Customers => self.row_with(RowAction::History).map(Intent::ShowCustomerHistory),
                _ => self.row_with(RowAction::Detail).map(Intent::ShowOrder),
            },
            KeyCode::Char('t') => self.row_with(RowAction::Toggle).map(Intent::ToggleCustomer),
            KeyCode::Char('a') => self.row_with(RowAction::Approve).map(|return_id| Intent::UpdateReturnStatus {
                return_id,
                status: ReturnStatus::Approved,
            }),
            KeyCode::Char('x') => self.row_with(RowAction::Reject).map(|return_id| Intent::UpdateReturnStatus {
                return_id,
                status: ReturnStatus::Rejected,
            }),
            KeyCode::Char('p') => self.row_with(RowAction::Pdf).map(Intent::ExportBill),
            KeyCode::Char('c') => Some(Intent::ExportOrdersCsv),
            KeyCode::Char('R') if view == View::Reports => {
                let from = self
                    .console
                    .active()
                    .and_then(|ctx| ctx.report_range.as_ref())
                    .map(|range| range.from.clone())
                    .unwrap_or_default();
                self.begin_input(InputPurpose::ReportFrom, from);
                None
            }
            KeyCode::Char('B') if view == View::Products => {
                self.begin_input(InputPurpose::BulkStock, String::new());
                None
            }
            KeyCode::Char('X') if view == View::Products => Some(Intent::BulkDeleteProducts),
            KeyCode::Char('S') if matches!(view, View::Orders | View::Bills) => {
                self.begin_input(InputPurpose::BulkStatus, String::new());
                None
            }
            _ => None,
        };
        intent.map_or(Action::None, Action::Dispatch)
    }

    fn begin_input(&mut self, purpose: InputPurpose, buffer: String) {
        self.mode = Mode::Input(InputLine { purpose, buffer });
    }

    fn next_facet(&self) -> Option<Intent> {
        let choices = facet_choices(self.console.records()?);
        if choices.len() < 2 {
            return None;
        }
        let current = self.console.active()?.query.facet.label().to_string();
        let position = choices.iter().position(|c| *c == current).unwrap_or(0);
        Some(Intent::FacetChanged(choices[(position + 1) % choices.len()].clone()))
    }
}

fn live_search(line: &InputLine) -> Action {
    match line.purpose {
        InputPurpose::Search => Action::Dispatch(Intent::SearchChanged(line.buffer.clone())),
        _ => Action::None,
    }
}
