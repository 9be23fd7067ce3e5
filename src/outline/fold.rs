use crate::dom::{Element, Page};
use crate::error::{PageError, Result};
use crate::outline::{OutlineLevel, OutlineSelectors};

/// A collapsible region that can report and change its expanded state
pub trait Foldable {
    fn is_expanded(&self) -> Result<bool>;

    fn expand(&self) -> Result<()>;

    /// Expand if collapsed; returns whether a click was needed
    fn ensure_expanded(&self) -> Result<bool> {
        if self.is_expanded()? {
            return Ok(false);
        }
        self.expand()?;
        Ok(true)
    }
}

/// An accordion item whose trigger carries `aria-expanded`
pub struct AccordionFold<E> {
    level: OutlineLevel,
    trigger: E,
}

impl<E: Element> AccordionFold<E> {
    /// Locate the trigger inside `container`
    pub fn locate(container: &E, level: OutlineLevel, trigger_selector: &str) -> Result<Self> {
        let trigger = container.query(trigger_selector)?.into_iter().next().ok_or_else(|| {
            PageError::ElementNotFound(format!("No {} fold trigger matches '{}'", level, trigger_selector))
        })?;
        Ok(Self { level, trigger })
    }

    pub fn level(&self) -> OutlineLevel {
        self.level
    }
}

impl<E: Element> Foldable for AccordionFold<E> {
    fn is_expanded(&self) -> Result<bool> {
        Ok(self.trigger.attribute("aria-expanded")?.as_deref() == Some("true"))
    }

    fn expand(&self) -> Result<()> {
        log::debug!("Expanding collapsed {} fold", self.level);
        self.trigger.click()
    }
}

/// Expand every section fold, then every subsection fold.
///
/// Subsections are queried only after all sections are open, so folds that
/// appear once their parent expands are included. Returns the number of clicks.
pub fn expand_all<P: Page>(page: &P, selectors: &OutlineSelectors) -> Result<usize> {
    let mut clicks = 0;
    for level in [OutlineLevel::Section, OutlineLevel::Subsection] {
        for container in page.query(selectors.container(level))? {
            let fold = AccordionFold::locate(&container, level, selectors.trigger(level))?;
            if fold.ensure_expanded()? {
                clicks += 1;
            }
        }
    }
    if clicks > 0 {
        log::debug!("Expanded {} outline fold(s)", clicks);
    }
    Ok(clicks)
}
