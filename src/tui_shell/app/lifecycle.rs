use super::*;

impl App {
    pub(super) fn load(opts: crate::tui::TuiRunOptions) -> Self {
        let mut app = App {
            api: opts.api,
            store: opts.state.session_store(),
            screen: Screen::Loading,
            identity: String::new(),
            login: LoginForm::default(),
            view: None,
            epoch: 0,
            tasks: TaskRunner::default(),
            modal: None,
            quit: false,
        };
        app.enter_gate();
        app
    }

    /// Re-evaluates the session. Nothing protected renders until the gate
    /// has decided.
    pub(super) fn enter_gate(&mut self) {
        self.unmount();
        self.screen = Screen::Loading;
        match AccessGate::begin(&self.store) {
            GateStep::Decided(decision) => self.apply_gate(decision),
            GateStep::Verify { token } => {
                let api = self.api.clone();
                self.tasks.spawn(self.epoch, "verify", move || {
                    TaskResult::Verified(api.verify_session(&token))
                });
            }
        }
    }

    fn apply_gate(&mut self, decision: GateDecision) {
        match decision {
            GateDecision::Authenticated => {
                self.identity = match self.store.credential() {
                    Ok(Some(cred)) => cred.display_identity().to_string(),
                    _ => "user".to_string(),
                };
                self.screen = Screen::Dashboard;
                self.mount(ViewKind::FlatAds);
            }
            GateDecision::Unauthenticated => {
                self.identity.clear();
                self.login.reset();
                self.screen = Screen::Login;
            }
        }
    }

    pub(super) fn submit_login(&mut self, user: String, password: String) {
        let api = self.api.clone();
        self.tasks.spawn(self.epoch, "login", move || {
            let result = api.login(&user, &password);
            TaskResult::LoggedIn { user, result }
        });
    }

    fn finish_login(&mut self, user: String, result: crate::error::ConsoleResult<String>) {
        self.login.submitting = false;
        let token = match result {
            Ok(token) => token,
            Err(err) => {
                self.login.error = Some(err.notice("Invalid credentials"));
                return;
            }
        };
        if let Err(err) = self.store.write(&token, &user) {
            tracing::error!(error = %err, "failed to persist session");
            self.login.error = Some(err.to_string());
            return;
        }
        self.enter_gate();
    }

    pub(super) fn logout(&mut self) {
        if let Err(err) = self.store.clear() {
            tracing::error!(error = %err, "failed to clear session");
        }
        tracing::info!("logged out");
        self.enter_gate();
    }

    /// Drops the current view and every pending result issued for it.
    fn unmount(&mut self) {
        self.epoch += 1;
        self.view = None;
        self.modal = None;
    }

    /// Mounts a fresh view and starts its fetch. Switching away and back
    /// always reloads; anything still in flight for the old view is dropped.
    pub(super) fn mount(&mut self, kind: ViewKind) {
        if self.screen != Screen::Dashboard {
            return;
        }
        self.unmount();
        let mut view: Box<dyn View> = match kind {
            ViewKind::FlatAds => Box::new(FlatAdsView::new()),
            ViewKind::GridAds => Box::new(GridAdsView::new()),
            ViewKind::Thumbnails => Box::new(ThumbnailsView::new()),
        };
        view.begin_load();
        self.view = Some(view);
        self.tasks
            .spawn(self.epoch, "load", tasks::load_job(self.api.clone(), kind));
        tracing::debug!(view = kind.label(), epoch = self.epoch, "view mounted");
    }

    /// Refetches inside the current mount. Saves still in flight keep their
    /// epoch and patch whatever list is current when they land.
    pub(super) fn reload(&mut self) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        let kind = view.kind();
        view.begin_load();
        self.tasks
            .spawn(self.epoch, "load", tasks::load_job(self.api.clone(), kind));
        tracing::debug!(view = kind.label(), epoch = self.epoch, "view reloaded");
    }

    pub(super) fn dispatch(&mut self, action: ViewAction) {
        match action {
            ViewAction::None => {}
            ViewAction::Notify(notice) => self.notify(notice),
            ViewAction::Save(request) => {
                tracing::debug!(
                    id = %request.id(),
                    len = request.value().len(),
                    "save requested"
                );
                self.tasks
                    .spawn(self.epoch, "save", tasks::save_job(self.api.clone(), request));
            }
        }
    }

    pub(super) fn notify(&mut self, notice: Notice) {
        self.modal = Some(Modal::new(notice));
    }

    pub(super) fn apply_finished_tasks(&mut self) {
        for envelope in self.tasks.drain() {
            self.apply_task(envelope);
        }
    }

    pub(super) fn apply_task(&mut self, envelope: TaskEnvelope) {
        if envelope.epoch != self.epoch {
            tracing::debug!(
                label = envelope.label,
                epoch = envelope.epoch,
                current = self.epoch,
                "dropping result for unmounted screen"
            );
            return;
        }
        match envelope.result {
            TaskResult::Verified(result) => {
                let decision = AccessGate::finish(&self.store, result);
                self.apply_gate(decision);
            }
            TaskResult::LoggedIn { user, result } => self.finish_login(user, result),
            other => {
                let Some(view) = self.view.as_mut() else {
                    return;
                };
                if let Some(notice) = view.apply(other) {
                    self.notify(notice);
                }
            }
        }
    }
}
