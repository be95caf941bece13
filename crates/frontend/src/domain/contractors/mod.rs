pub mod list;

use contracts::domain::contractor::{Contractor, ContractorStatus};

/// Демонстрационный реестр: данные в памяти, без загрузки с сервера.
pub fn demo_contractors() -> Vec<Contractor> {
    let raw: &[(&str, &str, &str, u32, ContractorStatus)] = &[
        ("СМУ-1 «СтройМонтаж»", "7701234567", "office@smu1.ru", 120, ContractorStatus::Active),
        ("ЭлектроСеть Сервис", "7812345678", "info@elset.ru", 45, ContractorStatus::Active),
        ("ПромВысота", "5012345678", "pv@promvysota.ru", 80, ContractorStatus::Suspended),
        ("ТеплоГазМонтаж", "7709876543", "tgm@tgm.ru", 64, ContractorStatus::Active),
        ("КровляПрофи", "7803214569", "sales@krovlya.pro", 18, ContractorStatus::Active),
        ("ГеоИзыскания", "5407654321", "geo@geoizysk.ru", 27, ContractorStatus::Archived),
        ("ЛифтРемонт", "7714567890", "lift@liftremont.ru", 33, ContractorStatus::Active),
        ("АльпСервис", "7898765432", "alp@alpservice.ru", 52, ContractorStatus::Active),
        ("СварТехМонтаж", "5023456789", "weld@svartech.ru", 41, ContractorStatus::Suspended),
        ("ЧистыйГород", "7721098765", "eco@chistygorod.ru", 95, ContractorStatus::Active),
        ("ФасадСтрой", "7834561298", "fs@fasadstroy.ru", 38, ContractorStatus::Active),
        ("ИнжСети Групп", "5045678912", "is@ingseti.ru", 71, ContractorStatus::Active),
        ("ДорСтройТех", "7756789123", "dst@dorstroy.ru", 110, ContractorStatus::Active),
        ("ВентКлимат", "7867891234", "vk@ventklimat.ru", 24, ContractorStatus::Archived),
        ("ОгнеЗащита", "5078912345", "fire@ognezashita.ru", 16, ContractorStatus::Active),
        ("БетонТрансСервис", "7789123456", "bts@betontrans.ru", 58, ContractorStatus::Active),
        ("МеталлКаркас", "7891234567", "mk@metallkarkas.ru", 47, ContractorStatus::Suspended),
        ("ГидроИзол", "5089123456", "gi@gidroizol.ru", 22, ContractorStatus::Active),
        ("СпецТехАренда", "7790123456", "sta@spectech.ru", 66, ContractorStatus::Active),
        ("ОтделкаЛюкс", "7801234568", "ol@otdelka.lux", 29, ContractorStatus::Active),
        ("ПутьСервис", "5090123456", "ps@putservice.ru", 84, ContractorStatus::Active),
        ("ЭкоУтилизация", "7702345678", "eu@ecoutil.ru", 19, ContractorStatus::Archived),
        ("КранМонтажСервис", "7813456789", "kms@kranmontazh.ru", 37, ContractorStatus::Active),
    ];

    raw.iter()
        .map(|&(name, inn, email, workers, status)| {
            let mut contractor = Contractor::new(name, inn, email, workers);
            contractor.status = status;
            contractor
        })
        .collect()
}
