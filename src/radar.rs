use crate::constants::{EDGE_ACTIVE_CLASS, PING_CLASS};
use crate::core::{EdgeDirection, SoundEvent, EDGE_FLASH_MS};
use crate::dom;
use crate::timer::Scheduler;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

/// The ping panel: a display region plus up to four edge indicators.
///
/// Cheap to clone; clones share the same elements, RNG and task table.
#[derive(Clone)]
pub struct Radar {
    document: web::Document,
    region: web::Element,
    edges: Rc<[Option<web::Element>; 4]>,
    rng: Rc<RefCell<StdRng>>,
    live_pings: Rc<RefCell<Vec<web::Element>>>,
    scheduler: Scheduler,
}

impl Radar {
    pub fn new(document: web::Document, region: web::Element) -> Self {
        let edges = EdgeDirection::ALL.map(|d| document.get_element_by_id(d.element_id()));
        for d in EdgeDirection::ALL {
            if edges[d.index()].is_none() {
                log::debug!("[radar] no indicator #{}", d.element_id());
            }
        }
        Self {
            document,
            region,
            edges: Rc::new(edges),
            rng: Rc::new(RefCell::new(StdRng::from_entropy())),
            live_pings: Rc::new(RefCell::new(Vec::new())),
            scheduler: Scheduler::new(),
        }
    }

    /// Click entry point for a trigger button. Unknown keys are ignored.
    pub fn handle_trigger_click(&self, key: &str) {
        let Some(event) = SoundEvent::from_key(key) else {
            log::debug!("[radar] ignoring unknown event {:?}", key);
            return;
        };
        for offset in event.burst_offsets() {
            // the leading ping runs in the click handler instead of a 0 ms timer
            if offset.is_zero() {
                self.spawn_ping(event);
                continue;
            }
            let radar = self.clone();
            if let Err(e) = self
                .scheduler
                .schedule(offset, move || radar.spawn_ping(event))
            {
                log::error!("[radar] burst scheduling failed: {:?}", e);
            }
        }
    }

    /// Place one ping for `event`, schedule its removal, and flash its edge.
    pub fn spawn_ping(&self, event: SoundEvent) {
        let cfg = event.config();
        let placement = cfg.place(&mut *self.rng.borrow_mut());
        log::debug!(
            "[radar] {} r={:.1} a={:.1} at ({:.1}%, {:.1}%)",
            event.key(),
            placement.radius,
            placement.angle,
            placement.position.x,
            placement.position.y
        );

        match self.attach_ping(cfg.visual_class, placement.position) {
            Ok(ping) => {
                let radar = self.clone();
                let scheduled = self
                    .scheduler
                    .schedule(event.display_duration(), move || radar.detach_ping(&ping));
                if let Err(e) = scheduled {
                    log::error!("[radar] ping removal scheduling failed: {:?}", e);
                }
            }
            Err(e) => log::error!("[radar] could not create ping: {:?}", e),
        }

        if let Some(edge) = cfg.edge {
            self.trigger_edge(edge.direction, edge.class);
        }
    }

    /// Highlight an edge indicator for a moment. Overlapping flashes on the
    /// same indicator are not coordinated: the first removal clears both.
    pub fn trigger_edge(&self, direction: EdgeDirection, class: &'static str) {
        let Some(el) = self.edges[direction.index()].clone() else {
            return;
        };
        dom::add_classes(&el, &[class, EDGE_ACTIVE_CLASS]);
        let scheduled = self
            .scheduler
            .schedule(Duration::from_millis(EDGE_FLASH_MS), move || {
                dom::remove_classes(&el, &[class, EDGE_ACTIVE_CLASS]);
            });
        if let Err(e) = scheduled {
            log::error!("[radar] edge flash scheduling failed: {:?}", e);
        }
    }

    /// Cancel everything still pending and clear the panel.
    pub fn teardown(&self) {
        let cancelled = self.scheduler.cancel_all();
        let pings: Vec<web::Element> = self.live_pings.borrow_mut().drain(..).collect();
        for ping in &pings {
            ping.remove();
        }
        let mut flash_classes: Vec<&str> = SoundEvent::ALL
            .iter()
            .filter_map(|e| e.config().edge)
            .map(|edge| edge.class)
            .collect();
        flash_classes.push(EDGE_ACTIVE_CLASS);
        for el in self.edges.iter().flatten() {
            dom::remove_classes(el, &flash_classes);
        }
        log::info!(
            "[radar] teardown: cancelled {} task(s), removed {} ping(s)",
            cancelled,
            pings.len()
        );
    }

    fn attach_ping(&self, visual_class: &str, position: glam::Vec2) -> anyhow::Result<web::Element> {
        let ping = self
            .document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ping.set_class_name(&format!("{} {}", PING_CLASS, visual_class));
        ping.set_attribute(
            "style",
            &format!("left:{}%;top:{}%", position.x, position.y),
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        self.region
            .append_child(&ping)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        self.live_pings.borrow_mut().push(ping.clone());
        Ok(ping)
    }

    fn detach_ping(&self, ping: &web::Element) {
        ping.remove();
        self.live_pings.borrow_mut().retain(|p| p != ping);
    }
}
