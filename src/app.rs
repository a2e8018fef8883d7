//! Main application window.
//! Owns the current screen and swaps it whenever a view asks to navigate.

use crate::router::Route;
use crate::task::Backend;
use crate::views::{CreateView, DetailView, ListView};
use eframe::egui;

/// Application screen states
enum Screen {
    List(ListView),
    Create(CreateView),
    Detail(DetailView),
}

impl Screen {
    fn open(route: &Route, backend: &Backend) -> Self {
        match route {
            Route::List => Screen::List(ListView::activate(backend)),
            Route::Create => Screen::Create(CreateView::activate()),
            Route::Detail(id) => Screen::Detail(DetailView::activate(id.clone(), backend)),
        }
    }
}

pub struct RevisionApp {
    backend: Backend,
    route: Route,
    screen: Screen,
}

impl eframe::App for RevisionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut navigate: Option<Route> = None;

        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.link("Home").clicked() {
                    navigate = Some(Route::List);
                }
                ui.separator();
                ui.weak(self.route.path());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let backend = &self.backend;
            let requested = match &mut self.screen {
                Screen::List(view) => {
                    view.poll();
                    view.ui(ui, backend)
                }
                Screen::Create(view) => {
                    let finished = view.poll();
                    let clicked = view.ui(ui, backend);
                    finished.or(clicked)
                }
                Screen::Detail(view) => {
                    let finished = view.poll();
                    let clicked = view.ui(ui, backend);
                    finished.or(clicked)
                }
            };
            if requested.is_some() {
                navigate = requested;
            }
        });

        if let Some(route) = navigate {
            self.navigate(route);
        }
    }
}

impl RevisionApp {
    pub fn new(backend: Backend, start: Route) -> Self {
        log::info!("Opening {}", start.path());
        let screen = Screen::open(&start, &backend);
        Self {
            backend,
            route: start,
            screen,
        }
    }

    /// Activates the view behind `route`. Every navigation fetches fresh
    /// data; a detail screen switching ids is reset in place.
    fn navigate(&mut self, route: Route) {
        log::info!("Navigating to {}", route.path());
        let reused = match (&mut self.screen, &route) {
            (Screen::Detail(view), Route::Detail(id)) => {
                view.reactivate(id.clone(), &self.backend);
                true
            }
            _ => false,
        };
        if !reused {
            self.screen = Screen::open(&route, &self.backend);
        }
        self.route = route;
    }
}
