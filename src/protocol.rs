//! Operating Protocol
//!
//! The verification checklist, grouped into accordion sections. Item ids
//! are persisted; never renumber them.

use checklist_store::ChecklistItem;

pub struct Section {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

pub const SECTIONS: &[Section] = &[
    Section {
        title: "1. Preparación del reactor",
        items: &[
            ("chk-prep-limpieza", "Verificar que el reactor esté limpio y sin residuos de cristales"),
            ("chk-prep-digestato", "Comprobar el nivel del tanque de digestato"),
            ("chk-prep-ph", "Calibrar la sonda de pH con soluciones tampón 4, 7 y 10"),
            ("chk-prep-temp", "Verificar la lectura de la sonda de temperatura"),
        ],
    },
    Section {
        title: "2. Dosificación de MgO",
        items: &[
            ("chk-mgo-suspension", "Preparar la suspensión de MgO según la calculadora"),
            ("chk-mgo-bomba", "Comprobar el caudal de la bomba dosificadora de MgO"),
            ("chk-mgo-agitacion", "Verificar la agitación del tanque de MgO"),
        ],
    },
    Section {
        title: "3. Operación",
        items: &[
            ("chk-op-caudal", "Arrancar la bomba de digestato al caudal de consigna"),
            ("chk-op-ph", "Confirmar que el pH se mantiene entre 8.0 y 9.0"),
            ("chk-op-temp", "Registrar la temperatura inicial del reactor"),
            ("chk-op-panel", "Verificar la conexión del panel con el servidor"),
        ],
    },
    Section {
        title: "4. Cierre",
        items: &[
            ("chk-cierre-muestra", "Tomar muestra del efluente para análisis de PO₄"),
            ("chk-cierre-cristales", "Recolectar y secar los cristales de estruvita"),
            ("chk-cierre-sondas", "Limpiar las sondas y dejarlas en solución de almacenamiento"),
        ],
    },
];

impl Section {
    pub fn checklist_items(&self) -> Vec<ChecklistItem> {
        self.items
            .iter()
            .map(|(id, label)| ChecklistItem::new(*id, *label))
            .collect()
    }
}

/// Every item in display order
pub fn checklist_items() -> Vec<ChecklistItem> {
    SECTIONS.iter().flat_map(Section::checklist_items).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let items = checklist_items();
        let ids: HashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_display_order() {
        let items = checklist_items();
        assert_eq!(items.first().unwrap().id, "chk-prep-limpieza");
        assert_eq!(items.last().unwrap().id, "chk-cierre-sondas");
        assert!(items.iter().all(|item| !item.label.is_empty()));
    }
}
