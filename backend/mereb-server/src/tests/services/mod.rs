mod person_service;
